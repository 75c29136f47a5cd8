//! Stores shared across cloned handles and threads

mod common;

use std::thread;

use ::common::prelude::*;
use crate::common::*;

const WORKERS: usize = 8;

fn worker_id(i: usize) -> String {
    format!("W{}", i)
}

#[test]
fn test_parallel_child_creates_all_inherit_from_parent() {
    let wiki = setup_test_env();
    wiki.pages()
        .create(
            "root",
            None,
            owner(&wiki),
            "root",
            Some(access(&[(COLLABORATOR_ID, AccessLevel::ReadOnly)])),
        )
        .unwrap();
    let child_owner = wiki.identities().find_user(NEW_OWNER_ID).unwrap();

    thread::scope(|s| {
        for i in 0..WORKERS {
            let wiki = wiki.clone();
            let child_owner = child_owner.clone();
            s.spawn(move || {
                wiki.pages()
                    .create(
                        format!("root/{}", i),
                        Some("root".to_string()),
                        child_owner,
                        "child",
                        None,
                    )
                    .unwrap();
            });
        }
    });

    let children = wiki.pages().children("root");
    assert_eq!(children.len(), WORKERS);
    for child in children {
        let page = wiki.pages().read(&child).unwrap();
        let access = page.access_map().unwrap();
        assert!(access.contains(AccessLevel::ReadWrite, CollaboratorKind::User, OWNER_ID));
        assert!(access.contains(
            AccessLevel::ReadOnly,
            CollaboratorKind::User,
            COLLABORATOR_ID
        ));
    }
}

#[test]
fn test_parallel_grants_are_all_kept() {
    let wiki = setup_test_env();
    for i in 0..WORKERS {
        wiki.identities().create_user(worker_id(i), "worker");
    }
    wiki.attachments()
        .create(FILE_NAME, FILE_CONTENT, owner(&wiki), None)
        .unwrap();

    thread::scope(|s| {
        for i in 0..WORKERS {
            let wiki = wiki.clone();
            s.spawn(move || {
                wiki.attachments()
                    .assign(
                        FILE_NAME,
                        &Requester::user(OWNER_ID),
                        &worker_id(i),
                        AccessLevel::ReadOnly,
                    )
                    .unwrap();
            });
        }
    });

    let attachment = wiki.attachments().read(FILE_NAME).unwrap();
    let read_only = attachment.access_map().unwrap().level(AccessLevel::ReadOnly);
    assert_eq!(read_only.len(), WORKERS);
    for i in 0..WORKERS {
        assert!(read_only.contains(CollaboratorKind::User, &worker_id(i)));
        assert!(wiki
            .attachments()
            .access(FILE_NAME, &Requester::user(worker_id(i)))
            .is_ok());
    }
}

#[test]
fn test_clones_share_one_store() {
    let wiki = setup_test_env();
    let other = wiki.clone();

    other
        .attachments()
        .create(FILE_NAME, FILE_CONTENT, owner(&other), None)
        .unwrap();
    other.identities().create_user("LATE", "late");

    assert_eq!(wiki.attachments().list(), vec![FILE_NAME.to_string()]);
    assert!(wiki.identities().find_user("LATE").is_some());
}
