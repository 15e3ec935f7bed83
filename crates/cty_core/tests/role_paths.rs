use cty_core::flow::catalog;
use cty_core::{
    AdminSetupError, AdminSetupForm, NavDirective, Role, RoleSelectionError, RoleSelectionFlow,
    ScreenId, SetupStep, StudentSetupError, StudentSetupFlow,
};

#[test]
fn proceed_without_a_role_is_rejected() {
    let flow = RoleSelectionFlow::new();
    assert!(!flow.can_proceed());
    assert_eq!(flow.proceed(), Err(RoleSelectionError::NoRoleSelected));
}

#[test]
fn staff_terminates_without_any_further_form() {
    let mut flow = RoleSelectionFlow::new();
    flow.select(Role::Staff);
    assert_eq!(flow.proceed(), Ok(NavDirective::Reset(ScreenId::Home)));
}

#[test]
fn student_and_admin_branch_into_their_setup_screens() {
    let mut flow = RoleSelectionFlow::new();

    flow.select(Role::Student);
    assert_eq!(
        flow.proceed(),
        Ok(NavDirective::Push(ScreenId::StudentSetup))
    );

    flow.select(Role::Admin);
    assert_eq!(flow.proceed(), Ok(NavDirective::Push(ScreenId::AdminSetup)));
}

#[test]
fn reselecting_replaces_the_highlighted_role() {
    let mut flow = RoleSelectionFlow::new();
    flow.select(Role::Staff);
    flow.select(Role::Student);
    assert_eq!(flow.selected(), Some(Role::Student));
}

#[test]
fn student_setup_requires_a_location_before_the_school_step() {
    let mut flow = StudentSetupFlow::new();
    assert_eq!(flow.step(), SetupStep::Location);
    assert_eq!(flow.proceed(), Err(StudentSetupError::MissingLocation));
    assert_eq!(flow.step(), SetupStep::Location);

    flow.select_location("Lagos, Nigeria")
        .expect("declared location should select");
    assert_eq!(flow.proceed(), Ok(None));
    assert_eq!(flow.step(), SetupStep::School);
}

#[test]
fn student_setup_requires_a_school_before_completing() {
    let mut flow = StudentSetupFlow::new();
    flow.select_location("Abuja, Nigeria").expect("location");
    flow.proceed().expect("advance to school step");

    assert_eq!(flow.proceed(), Err(StudentSetupError::MissingSchool));

    flow.select_school("Nile University").expect("school");
    assert_eq!(
        flow.proceed(),
        Ok(Some(NavDirective::Reset(ScreenId::Home)))
    );
}

#[test]
fn student_setup_rejects_selections_outside_the_catalog() {
    let mut flow = StudentSetupFlow::new();
    let err = flow.select_location("Atlantis").unwrap_err();
    assert_eq!(err, StudentSetupError::UnknownLocation("Atlantis".to_string()));

    flow.select_location("Kano, Nigeria").expect("location");
    let err = flow.select_school("University of Lagos").unwrap_err();
    assert_eq!(
        err,
        StudentSetupError::UnknownSchool("University of Lagos".to_string())
    );
}

#[test]
fn selecting_a_school_needs_a_location_first() {
    let mut flow = StudentSetupFlow::new();
    assert_eq!(
        flow.select_school("University of Lagos"),
        Err(StudentSetupError::MissingLocation)
    );
}

#[test]
fn changing_location_clears_the_chosen_school() {
    let mut flow = StudentSetupFlow::new();
    flow.select_location("Lagos, Nigeria").expect("location");
    flow.proceed().expect("advance");
    flow.select_school("University of Lagos").expect("school");

    flow.back();
    flow.select_location("Ibadan, Nigeria")
        .expect("second location");
    assert_eq!(flow.school(), None);
}

#[test]
fn back_steps_within_the_flow_then_leaves_it() {
    let mut flow = StudentSetupFlow::new();
    flow.select_location("Other").expect("location");
    flow.proceed().expect("advance");

    assert_eq!(flow.back(), None);
    assert_eq!(flow.step(), SetupStep::Location);
    assert_eq!(flow.location(), Some("Other"));

    assert_eq!(flow.back(), Some(NavDirective::Pop));
}

#[test]
fn school_step_offers_the_chosen_locations_list() {
    let mut flow = StudentSetupFlow::new();
    flow.select_location("Port Harcourt, Nigeria")
        .expect("location");
    flow.proceed().expect("advance");
    assert_eq!(
        flow.options(),
        catalog::schools_for("Port Harcourt, Nigeria").expect("declared location")
    );
}

#[test]
fn admin_setup_requires_both_fields() {
    let mut form = AdminSetupForm::new();
    assert!(!form.can_complete());
    assert_eq!(form.complete(), Err(AdminSetupError::MissingSchoolName));

    form.school_name = "Sunrise Academy".to_string();
    assert_eq!(form.complete(), Err(AdminSetupError::MissingLocation));

    form.location = "Lagos, Nigeria".to_string();
    assert!(form.can_complete());
    assert_eq!(form.complete(), Ok(NavDirective::Reset(ScreenId::Home)));
}

#[test]
fn admin_setup_treats_whitespace_as_missing() {
    let form = AdminSetupForm {
        school_name: "   ".to_string(),
        location: "Lagos, Nigeria".to_string(),
    };
    assert_eq!(form.complete(), Err(AdminSetupError::MissingSchoolName));
}
