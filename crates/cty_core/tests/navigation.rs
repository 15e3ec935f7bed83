use cty_core::{
    NavDirective, Navigator, OnboardingFlow, RegisterForm, Role, RoleSelectionFlow, ScreenId,
    StudentSetupFlow,
};

#[test]
fn push_and_pop_shape_the_stack() {
    let mut nav = Navigator::new(ScreenId::Welcome);
    nav.push(ScreenId::Register);
    nav.push(ScreenId::RoleSelection);
    assert_eq!(
        nav.stack(),
        [ScreenId::Welcome, ScreenId::Register, ScreenId::RoleSelection]
    );
    assert_eq!(nav.current(), ScreenId::RoleSelection);

    assert!(nav.pop());
    assert_eq!(nav.current(), ScreenId::Register);
}

#[test]
fn pop_at_the_root_is_a_no_op() {
    let mut nav = Navigator::new(ScreenId::Home);
    assert!(!nav.pop());
    assert_eq!(nav.stack(), [ScreenId::Home]);
}

#[test]
fn replace_swaps_only_the_active_screen() {
    let mut nav = Navigator::new(ScreenId::Welcome);
    nav.push(ScreenId::Login);
    nav.replace(ScreenId::Register);
    assert_eq!(nav.stack(), [ScreenId::Welcome, ScreenId::Register]);
}

#[test]
fn reset_discards_the_history() {
    let mut nav = Navigator::new(ScreenId::Onboarding);
    nav.push(ScreenId::Welcome);
    nav.push(ScreenId::Register);
    nav.reset(ScreenId::Home);
    assert_eq!(nav.stack(), [ScreenId::Home]);
    assert_eq!(nav.depth(), 1);
}

#[test]
fn apply_maps_each_directive() {
    let mut nav = Navigator::new(ScreenId::Welcome);

    nav.apply(NavDirective::Push(ScreenId::Login));
    assert_eq!(nav.current(), ScreenId::Login);

    nav.apply(NavDirective::Replace(ScreenId::Register));
    assert_eq!(nav.current(), ScreenId::Register);

    nav.apply(NavDirective::Pop);
    assert_eq!(nav.current(), ScreenId::Welcome);

    nav.apply(NavDirective::Reset(ScreenId::Home));
    assert_eq!(nav.stack(), [ScreenId::Home]);
}

#[test]
fn apply_pop_at_the_root_keeps_the_root() {
    let mut nav = Navigator::new(ScreenId::Welcome);
    nav.apply(NavDirective::Pop);
    assert_eq!(nav.stack(), [ScreenId::Welcome]);
}

#[test]
fn route_names_are_stable() {
    assert_eq!(ScreenId::RoleSelection.route_name(), "role_selection");
    assert_eq!(ScreenId::StudentSetup.route_name(), "student_setup");
    assert_eq!(ScreenId::Home.route_name(), "home");
}

// Full first-launch journey for a student account, driven entirely by
// flow-produced directives.
#[test]
fn student_first_launch_journey_ends_on_home() {
    let mut nav = Navigator::new(ScreenId::Onboarding);

    let mut onboarding = OnboardingFlow::sample();
    let directive = onboarding.skip();
    nav.apply(directive);
    assert_eq!(nav.current(), ScreenId::Welcome);

    nav.apply(NavDirective::Push(ScreenId::Register));
    let register = RegisterForm {
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@email.com".to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
    };
    nav.apply(register.submit().expect("complete registration form"));
    assert_eq!(nav.current(), ScreenId::RoleSelection);

    let mut roles = RoleSelectionFlow::new();
    roles.select(Role::Student);
    nav.apply(roles.proceed().expect("role selected"));
    assert_eq!(nav.current(), ScreenId::StudentSetup);

    let mut setup = StudentSetupFlow::new();
    setup.select_location("Lagos, Nigeria").expect("location");
    assert_eq!(setup.proceed().expect("advance to school step"), None);
    setup.select_school("University of Lagos").expect("school");
    let done = setup
        .proceed()
        .expect("complete setup")
        .expect("completion directive");
    nav.apply(done);

    assert_eq!(nav.stack(), [ScreenId::Home]);
}
