//! Feed Demo: one query, two pages, a facet, and a late answer
//!
//! Shows:
//! 1. First page merges with duplicates removed
//! 2. Designer facets come from the results themselves
//! 3. Scrolling to the sentinel fetches page 2
//! 4. Narrowing by designer never fetches
//! 5. A new search makes the old in-flight page inert
//! 6. An empty page ends pagination

use feed::{Completion, QueryController, SearchResponse};
use lookbook::Identifier;

fn page(ids: &[&str]) -> SearchResponse {
    SearchResponse { results: ids.iter().map(|s| Identifier::from(*s)).collect() }
}

fn show(ctl: &QueryController) {
    for card in ctl.display_items() {
        println!("   {:<18} {}", card.designer, card.subtitle);
    }
    println!("   ({} of {} shown)\n", ctl.visible().len(), ctl.results().len());
}

fn main() {
    println!("Runway feed walkthrough\n");

    let mut ctl = QueryController::default();

    // 1. First page
    println!("Step 1: search \"leather\"");
    let first = ctl.submit("leather");
    println!("   request: {:?}", first.request);
    let done = ctl.complete(
        &first,
        Ok(page(&[
            "static/A/HouseX/housex-leather-jacket-12.jpg",
            "static/A/HouseX/housex-leather-jacket-12.jpg",
            "static/A/HouseY/housey-paris-fashion-week-silk-dress-3.jpg",
        ])),
    );
    println!("   {done:?}");
    show(&ctl);

    // 2. Facets
    println!("Step 2: designer facets");
    println!("   {:?}\n", ctl.vocabulary().to_vec());

    // 3. Scroll
    println!("Step 3: sentinel scrolls into view");
    let second = ctl.sentinel_visibility(true).unwrap();
    println!("   request: {:?}", second.request);
    println!("   again while loading: {:?}", ctl.sentinel_visibility(true));
    ctl.complete(
        &second,
        Ok(page(&[
            "static/A/Alexander%20McQueen/alexander-mcqueen-corset-gown-21.jpg",
            "static/A/HouseY/housey-cape-7.jpg",
        ])),
    );
    show(&ctl);

    // 4. Facet narrowing
    println!("Step 4: only HouseY");
    ctl.select_designer("HouseY");
    show(&ctl);
    ctl.select_designer(lookbook::ALL_DESIGNERS);

    // 5. Stale answer
    println!("Step 5: new search while page 3 is in flight");
    ctl.sentinel_visibility(false);
    let third = ctl.sentinel_visibility(true).unwrap();
    let fresh = ctl.submit("tailoring");
    let late = ctl.complete(&third, Ok(page(&["static/A/HouseX/housex-belt-30.jpg"])));
    println!("   late page {}: {late:?}", third.request.page);
    ctl.complete(&fresh, Ok(page(&["static/A/HouseZ/housez-double-breasted-suit-2.jpg"])));
    show(&ctl);

    // 6. Exhaustion
    println!("Step 6: page 2 of \"tailoring\" comes back empty");
    ctl.sentinel_visibility(false);
    let next = ctl.sentinel_visibility(true).unwrap();
    let done = ctl.complete(&next, Ok(page(&[])));
    assert!(matches!(done, Completion::Exhausted { .. }));
    println!("   {done:?}");
    println!("   further scrolling: {:?}", ctl.sentinel_visibility(true));
}
