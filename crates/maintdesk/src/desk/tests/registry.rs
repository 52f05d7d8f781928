use super::common::*;
use crate::desk::domain::{Category, Location, RequestStatus};
use crate::desk::domain::RequestId;
use crate::desk::ids::IdSpaceError;
use crate::desk::requests::RegistryError;
use crate::desk::service::DeskError;

#[test]
fn create_then_get_returns_a_new_unassigned_request() {
    let mut desk = desk();
    let id = log_request(&mut desk, 12, Location::Ly5, Category::Electricity, 4);

    let request = desk.requests().get(id).expect("request stored");
    assert_eq!(request.id(), id);
    assert_eq!(request.location(), Location::Ly5);
    assert_eq!(request.category(), Category::Electricity);
    assert_eq!(request.priority().rank(), 4);
    assert_eq!(request.status(), RequestStatus::New);
    assert_eq!(request.technician(), None);
}

#[test]
fn create_rejects_duplicate_ids_and_keeps_the_original() {
    let mut desk = desk();
    let id = log_request(&mut desk, 9, Location::Ly6, Category::Plumbing, 2);

    let result = desk.create_request(id, Location::Ly7, Category::Ac, priority(5));
    match result {
        Err(DeskError::Registry(RegistryError::Id(IdSpaceError::Duplicate { id: 9 }))) => {}
        other => panic!("expected duplicate id error, got {other:?}"),
    }

    let kept = desk.requests().get(id).expect("original still stored");
    assert_eq!(kept.location(), Location::Ly6);
    assert_eq!(kept.category(), Category::Plumbing);
    assert_eq!(kept.priority().rank(), 2);
}

#[test]
fn create_rejects_ids_past_the_bound() {
    let mut desk = desk();
    let result = desk.create_request(
        RequestId(151),
        Location::Ly5,
        Category::Ac,
        priority(1),
    );
    assert!(matches!(
        result,
        Err(DeskError::Registry(RegistryError::Id(
            IdSpaceError::OutOfRange { id: 151, capacity: 150 }
        )))
    ));
    assert!(desk.requests().get(RequestId(151)).is_err());
}

#[test]
fn get_unknown_id_is_not_found() {
    let desk = desk();
    assert_eq!(
        desk.requests().get(RequestId(42)),
        Err(RegistryError::NotFound(RequestId(42)))
    );
    // out-of-bounds lookups are NotFound too, never a panic
    assert_eq!(
        desk.requests().get(RequestId(9999)),
        Err(RegistryError::NotFound(RequestId(9999)))
    );
}

#[test]
fn list_all_orders_by_ascending_id() {
    let mut desk = desk();
    log_request(&mut desk, 90, Location::Ly7, Category::Ac, 1);
    log_request(&mut desk, 3, Location::Ly5, Category::Plumbing, 3);
    log_request(&mut desk, 41, Location::Ly6, Category::Electricity, 5);

    let ids: Vec<u16> = desk
        .requests()
        .list_all()
        .into_iter()
        .map(|request| request.id().0)
        .collect();
    assert_eq!(ids, vec![3, 41, 90]);
}

#[test]
fn list_by_status_filters_in_ascending_id_order() {
    let mut desk = desk();
    log_request(&mut desk, 4, Location::Ly5, Category::Electricity, 2);
    let assigned = log_request(&mut desk, 6, Location::Ly6, Category::Plumbing, 2);
    log_request(&mut desk, 8, Location::Ly7, Category::Ac, 2);
    desk.assign(assigned, crate::desk::domain::TechnicianId(2))
        .expect("specialty matches");

    let pending: Vec<u16> = desk
        .requests()
        .list_by_status(RequestStatus::New)
        .into_iter()
        .map(|request| request.id().0)
        .collect();
    assert_eq!(pending, vec![4, 8]);

    let busy: Vec<u16> = desk
        .requests()
        .list_by_status(RequestStatus::Assigned)
        .into_iter()
        .map(|request| request.id().0)
        .collect();
    assert_eq!(busy, vec![6]);
}

#[test]
fn list_by_category_returns_the_matching_subset() {
    let mut desk = desk();
    log_request(&mut desk, 1, Location::Ly5, Category::Electricity, 1);
    log_request(&mut desk, 2, Location::Ly6, Category::Plumbing, 2);
    log_request(&mut desk, 3, Location::Ly7, Category::Electricity, 3);

    let sparks: Vec<u16> = desk
        .requests()
        .list_by_category(Category::Electricity)
        .into_iter()
        .map(|request| request.id().0)
        .collect();
    assert_eq!(sparks, vec![1, 3]);
}

#[test]
fn list_by_category_zero_matches_is_an_empty_listing_not_an_error() {
    let mut desk = desk();
    log_request(&mut desk, 1, Location::Ly5, Category::Electricity, 1);

    let matches = desk.requests().list_by_category(Category::Ac);
    assert!(matches.is_empty());
}

#[test]
fn status_machine_permits_only_the_forward_path() {
    let mut desk = desk();
    let id = log_request(&mut desk, 10, Location::Ly5, Category::Ac, 3);

    // NEW refuses DONE and NEW
    for target in [RequestStatus::Done, RequestStatus::New] {
        assert!(matches!(
            desk.update_status(id, target),
            Err(DeskError::Registry(RegistryError::Transition(_)))
        ));
    }

    assert_eq!(
        desk.update_status(id, RequestStatus::Assigned)
            .expect("NEW -> ASSIGNED is legal"),
        RequestStatus::Assigned
    );

    // ASSIGNED refuses ASSIGNED and NEW
    for target in [RequestStatus::Assigned, RequestStatus::New] {
        assert!(matches!(
            desk.update_status(id, target),
            Err(DeskError::Registry(RegistryError::Transition(_)))
        ));
    }

    assert_eq!(
        desk.update_status(id, RequestStatus::Done)
            .expect("ASSIGNED -> DONE is legal"),
        RequestStatus::Done
    );

    // DONE is terminal
    for target in [RequestStatus::New, RequestStatus::Assigned, RequestStatus::Done] {
        assert!(matches!(
            desk.update_status(id, target),
            Err(DeskError::Registry(RegistryError::Transition(_)))
        ));
    }
}

#[test]
fn transition_status_on_unknown_id_is_not_found() {
    let mut desk = desk();
    assert!(matches!(
        desk.update_status(RequestId(77), RequestStatus::Assigned),
        Err(DeskError::Registry(RegistryError::NotFound(RequestId(77))))
    ));
}
