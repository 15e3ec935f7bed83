use cty_core::{NavDirective, OnboardingError, OnboardingFlow, OnboardingPage, ScreenId};

fn pages(count: usize) -> Vec<OnboardingPage> {
    (0..count)
        .map(|index| {
            OnboardingPage::new(
                format!("Page {index}"),
                format!("Description {index}"),
                format!("assets/page{index}.png"),
            )
        })
        .collect()
}

#[test]
fn starts_at_page_zero() {
    let flow = OnboardingFlow::sample();
    assert_eq!(flow.page_index(), 0);
    assert_eq!(flow.page_count(), 3);
    assert_eq!(flow.current_page().title, "Track Homework");
}

#[test]
fn rejects_empty_page_sequence() {
    let err = OnboardingFlow::new(Vec::new()).unwrap_err();
    assert_eq!(err, OnboardingError::NoPages);
}

#[test]
fn next_walks_forward_and_completes_on_last_page() {
    let mut flow = OnboardingFlow::new(pages(3)).expect("three pages");

    assert_eq!(flow.next(), None);
    assert_eq!(flow.page_index(), 1);
    assert_eq!(flow.next(), None);
    assert_eq!(flow.page_index(), 2);
    assert!(flow.is_last_page());

    let done = flow.next().expect("last page should complete");
    assert_eq!(done, NavDirective::Push(ScreenId::Welcome));
    // Completion does not move the index past the end.
    assert_eq!(flow.page_index(), 2);
}

#[test]
fn previous_at_page_zero_is_a_no_op() {
    let mut flow = OnboardingFlow::new(pages(3)).expect("three pages");
    assert!(!flow.previous());
    assert_eq!(flow.page_index(), 0);
}

#[test]
fn previous_steps_back_one_page() {
    let mut flow = OnboardingFlow::new(pages(3)).expect("three pages");
    flow.next();
    flow.next();
    assert!(flow.previous());
    assert_eq!(flow.page_index(), 1);
}

#[test]
fn skip_completes_from_any_page_in_one_transition() {
    for start in 0..3 {
        let mut flow = OnboardingFlow::new(pages(3)).expect("three pages");
        for _ in 0..start {
            flow.next();
        }
        assert_eq!(flow.skip(), NavDirective::Push(ScreenId::Welcome));
    }
}

#[test]
fn next_from_last_page_is_equivalent_to_skip() {
    let mut flow = OnboardingFlow::new(pages(2)).expect("two pages");
    flow.next();
    assert_eq!(flow.next(), Some(flow.skip()));
}

#[test]
fn single_page_sequence_completes_immediately() {
    let mut flow = OnboardingFlow::new(pages(1)).expect("one page");
    assert_eq!(flow.next(), Some(NavDirective::Push(ScreenId::Welcome)));
}

#[test]
fn swipe_left_advances_and_swipe_right_goes_back() {
    let mut flow = OnboardingFlow::new(pages(3)).expect("three pages");

    assert_eq!(flow.swipe(-80.0), None);
    assert_eq!(flow.page_index(), 1);

    assert_eq!(flow.swipe(80.0), None);
    assert_eq!(flow.page_index(), 0);
}

#[test]
fn swipe_below_threshold_is_a_no_op() {
    let mut flow = OnboardingFlow::new(pages(3)).expect("three pages");
    assert_eq!(flow.swipe(30.0), None);
    assert_eq!(flow.swipe(-30.0), None);
    assert_eq!(flow.page_index(), 0);
}

#[test]
fn swipe_left_on_last_page_completes() {
    let mut flow = OnboardingFlow::new(pages(2)).expect("two pages");
    flow.next();
    assert_eq!(
        flow.swipe(-80.0),
        Some(NavDirective::Push(ScreenId::Welcome))
    );
}
