//! Authorization properties checked against the public service surface

mod common;

use ::common::prelude::*;
use crate::common::*;

#[test]
fn test_owner_listed_under_no_access_is_still_allowed() {
    let wiki = setup_test_env();
    wiki.attachments()
        .create(
            FILE_NAME,
            FILE_CONTENT,
            owner(&wiki),
            Some(access(&[(OWNER_ID, AccessLevel::NoAccess)])),
        )
        .unwrap();

    for action in Action::ALL {
        for is_individual in [true, false] {
            let requester = Requester::new(OWNER_ID, is_individual);
            assert_eq!(
                wiki.explain_attachment(FILE_NAME, &requester, action),
                Ok(Rule::Owner)
            );
        }
    }
}

#[test]
fn test_admin_team_allowed_without_entry() {
    let wiki = setup_test_env();
    wiki.pages()
        .create("P1", None, owner(&wiki), "root", None)
        .unwrap();

    for action in Action::ALL {
        assert_eq!(
            wiki.explain_page("P1", &Requester::team(ADMIN_TEAM_ID), action),
            Ok(Rule::AdminTeam)
        );
    }
}

#[test]
fn test_unknown_requester_is_denied_everything() {
    let wiki = setup_test_env();
    wiki.pages()
        .create("P1", None, owner(&wiki), "root", None)
        .unwrap();

    for action in Action::ALL {
        for is_individual in [true, false] {
            let requester = Requester::new("STRANGER", is_individual);
            assert_eq!(
                wiki.explain_page("P1", &requester, action),
                Ok(Rule::UnknownRequester)
            );
        }
    }
}

#[test]
fn test_levels_match_exactly() {
    let wiki = setup_test_env();
    wiki.pages()
        .create(
            "P1",
            None,
            owner(&wiki),
            "root",
            Some(access(&[
                (COLLABORATOR_ID, AccessLevel::ReadOnly),
                (NEW_OWNER_ID, AccessLevel::NoAccess),
            ])),
        )
        .unwrap();
    let bob = Requester::user(COLLABORATOR_ID);
    let carol = Requester::user(NEW_OWNER_ID);

    assert_eq!(
        wiki.explain_page("P1", &bob, Action::Read),
        Ok(Rule::Granted(AccessLevel::ReadOnly))
    );
    for action in [Action::Update, Action::Delete] {
        assert_eq!(wiki.explain_page("P1", &bob, action), Ok(Rule::NotGranted));
    }
    for action in Action::ALL {
        assert_eq!(wiki.explain_page("P1", &carol, action), Ok(Rule::NotGranted));
    }
}

#[test]
fn test_team_sharing_a_user_id_gets_none_of_the_user_grant() {
    let wiki = setup_test_env();
    wiki.identities().create_user("X", "shadow");
    wiki.identities().create_team("X", false);
    wiki.attachments()
        .create(
            FILE_NAME,
            FILE_CONTENT,
            owner(&wiki),
            Some(access(&[("X", AccessLevel::ReadWrite)])),
        )
        .unwrap();

    assert_eq!(
        wiki.explain_attachment(FILE_NAME, &Requester::user("X"), Action::Delete),
        Ok(Rule::Granted(AccessLevel::ReadWrite))
    );
    for action in Action::ALL {
        assert_eq!(
            wiki.explain_attachment(FILE_NAME, &Requester::team("X"), action),
            Ok(Rule::NotGranted)
        );
    }
}

#[test]
fn test_explain_missing_component() {
    let wiki = setup_test_env();
    let result = wiki.explain_page("P404", &Requester::user(OWNER_ID), Action::Read);
    assert!(result.unwrap_err().is_not_found());
}

#[test]
fn test_stores_remain_usable_after_failures() {
    let wiki = setup_test_env();
    let bob = Requester::user(COLLABORATOR_ID);
    wiki.attachments()
        .create(FILE_NAME, FILE_CONTENT, owner(&wiki), None)
        .unwrap();

    assert!(wiki.attachments().access(FILE_NAME, &bob).is_err());
    assert!(wiki.attachments().delete("nope", &bob).is_err());

    wiki.attachments()
        .assign(
            FILE_NAME,
            &Requester::user(OWNER_ID),
            COLLABORATOR_ID,
            AccessLevel::ReadWrite,
        )
        .unwrap();
    assert!(wiki.attachments().delete(FILE_NAME, &bob).is_ok());
}
