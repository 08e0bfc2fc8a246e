//! Integration tests for the view-state controller against the seed store.

use std::rc::Rc;

use chrono::Utc;

use campusdash::filter::UserCategory;
use campusdash::model::address::Mailbox;
use campusdash::model::mail::{Folder, Label, LabelFilter, MailMessage, MessageId};
use campusdash::store::memory::MemoryStore;
use campusdash::store::seed::SeedData;
use campusdash::store::RecordStore;
use campusdash::view::{Controller, Section, SENT_NOTICE};

fn controller() -> Controller<MemoryStore> {
    let store = MemoryStore::from_seed(SeedData::builtin().unwrap());
    Controller::new(store, Mailbox::new("Registrar", "registrar@mak.ac.ug"), 8)
}

// ─── Memoised user selection ────────────────────────────────────────

#[test]
fn test_select_category_is_memoised() {
    let mut c = controller();
    let before = c.user_filter_computations();

    let first = c.select_category(UserCategory::Lecturer);
    let second = c.select_category(UserCategory::Lecturer);

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(c.user_filter_computations(), before + 1);
    assert_eq!(c.state().category, UserCategory::Lecturer);
}

#[test]
fn test_switching_back_hits_the_memo() {
    let mut c = controller();
    let admins = c.select_category(UserCategory::Administrator);
    c.select_category(UserCategory::Corporate);
    let again = c.select_category(UserCategory::Administrator);
    assert!(Rc::ptr_eq(&admins, &again));

    let names: Vec<&str> = c.visible_users().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["System Root", "Grace Achieng", "Mary Nakato"]);
}

// ─── Mailbox selections ─────────────────────────────────────────────

#[test]
fn test_select_folder_resets_label_and_selection() {
    let mut c = controller();
    c.select_section(Section::Mailbox);
    c.select_label(LabelFilter::Starred);
    c.select_message(MessageId(1));

    c.select_folder(Folder::Spam);

    assert_eq!(c.state().folder, Folder::Spam);
    assert_eq!(c.state().label, LabelFilter::All);
    assert_eq!(c.state().selected_message, None);
    assert!(c.visible_messages().iter().all(|m| m.folder == Folder::Spam));
}

#[test]
fn test_select_label_only_clears_selection() {
    let mut c = controller();
    c.select_folder(Folder::Trash);
    c.select_message(MessageId(7));

    c.select_label(LabelFilter::Label(Label::Company));

    assert_eq!(c.state().folder, Folder::Trash);
    assert_eq!(c.state().label, LabelFilter::Label(Label::Company));
    assert_eq!(c.state().selected_message, None);
    let ids: Vec<MessageId> = c.visible_messages().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![MessageId(2), MessageId(8)]);
}

#[test]
fn test_open_compose_clears_selection() {
    let mut c = controller();
    c.select_message(MessageId(2));
    c.open_compose();
    assert!(c.state().composing);
    assert_eq!(c.state().selected_message, None);

    // Opening a message leaves compose mode again.
    c.select_message(MessageId(2));
    assert!(!c.state().composing);
}

// ─── Sending ────────────────────────────────────────────────────────

#[test]
fn test_submit_draft_to_admin_appends_two_records() {
    let mut c = controller();
    c.select_section(Section::Mailbox);
    let before = c.messages().len();

    c.open_compose();
    c.draft_mut().to = "root@mak.ac.ug".to_string();
    c.draft_mut().subject = "Server room access".to_string();
    let receipt = c.submit_draft();

    assert_eq!(receipt.notice, SENT_NOTICE);
    assert!(receipt.delivered_internally);
    assert_eq!(receipt.records.len(), 2);
    assert_eq!(c.messages().len(), before + 2);
    assert!(c.draft().is_blank());
    assert!(!c.state().composing);

    // The inbox copy shows up in the inbox view immediately.
    let inbox_copy = receipt.records[1];
    assert!(c.visible_messages().iter().any(|m| m.id == inbox_copy));
}

#[test]
fn test_submit_draft_to_outsider_appends_one_record() {
    let mut c = controller();
    let before = c.store().messages().len();
    c.open_compose();
    c.draft_mut().to = "friend@example.org".to_string();
    let receipt = c.submit_draft();

    assert!(!receipt.delivered_internally);
    assert_eq!(receipt.notice, SENT_NOTICE);
    assert_eq!(c.store().messages().len(), before + 1);

    c.select_folder(Folder::Sent);
    assert!(c.visible_messages().iter().any(|m| m.id == receipt.records[0]));
}

#[test]
fn test_empty_draft_still_succeeds() {
    let mut c = controller();
    c.open_compose();
    let receipt = c.submit_draft();
    assert_eq!(receipt.records.len(), 1);
    assert_eq!(receipt.notice, SENT_NOTICE);
}

// ─── Refresh ────────────────────────────────────────────────────────

#[test]
fn test_entering_mailbox_refreshes_from_store() {
    let mut c = controller();
    c.select_section(Section::Users);

    let external = MailMessage {
        id: MessageId(50),
        from: Mailbox::parse("Library <library@mak.ac.ug>"),
        to: vec!["registrar@mak.ac.ug".to_string()],
        cc: Vec::new(),
        bcc: Vec::new(),
        subject: "Overdue books".to_string(),
        body: String::new(),
        timestamp: Utc::now(),
        read: false,
        starred: false,
        folder: Folder::Inbox,
        label: None,
        attachments: Vec::new(),
    };
    c.store_mut().send_message(external);
    assert!(!c.messages().iter().any(|m| m.id == MessageId(50)));

    c.select_section(Section::Mailbox);
    assert!(c.visible_messages().iter().any(|m| m.id == MessageId(50)));

    // New ids continue past the externally added record.
    c.open_compose();
    let receipt = c.submit_draft();
    assert!(receipt.records[0].0 > 50);
}

#[test]
fn test_flag_toggles_and_trash() {
    let mut c = controller();
    assert!(c.toggle_starred(MessageId(3)));
    c.select_label(LabelFilter::Starred);
    assert!(c.visible_messages().iter().any(|m| m.id == MessageId(3)));

    assert!(c.toggle_read(MessageId(3)));
    assert!(c.messages().iter().any(|m| m.id == MessageId(3) && m.read));

    assert!(c.move_to_trash(MessageId(3)));
    c.select_folder(Folder::Trash);
    assert!(c.visible_messages().iter().any(|m| m.id == MessageId(3)));
    assert!(!c.toggle_starred(MessageId(404)));
}

#[test]
fn test_explore_tag_filter() {
    let mut c = controller();
    c.select_section(Section::Explore);
    assert_eq!(c.visible_posts().len(), 5);
    c.select_tag(Some("clubs".to_string()));
    let ids: Vec<u64> = c.visible_posts().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![5, 2]);
    assert_eq!(c.user_name(4), Some("Aisha Namutebi"));
}

#[test]
fn test_seed_with_highest_possible_id_keeps_ids_unique() {
    let mut seed = SeedData::builtin().unwrap();
    seed.messages[0].id = MessageId(u64::MAX);
    let store = MemoryStore::from_seed(seed);
    let mut c = Controller::new(store, Mailbox::new("Registrar", "registrar@mak.ac.ug"), 8);

    c.open_compose();
    c.draft_mut().to = "root@mak.ac.ug".to_string();
    let receipt = c.submit_draft();
    c.open_compose();
    c.submit_draft();

    let mut ids: Vec<MessageId> = c.messages().iter().map(|m| m.id).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert!(!receipt.records.contains(&MessageId(u64::MAX)));
}
