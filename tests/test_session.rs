//! End-to-end tests for the command session.
//!
//! These tests drive the assistant exactly as a user would, one line at a
//! time, and check the replies.

mod fixtures;

use address_book::{run, Command, FixedClock, Reply, Session, DEFAULT_WINDOW_DAYS};
use fixtures::*;

fn session_on(today: &str) -> Session<FixedClock> {
    Session::new(FixedClock(date(today)), DEFAULT_WINDOW_DAYS)
}

/// Feed lines to a session and collect the reply texts.
fn transcript(session: &mut Session<FixedClock>, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| session.handle_line(line).text().to_string())
        .collect()
}

#[test]
fn test_contact_lifecycle() {
    let mut session = session_on("10.03.2024");

    let replies = transcript(
        &mut session,
        &[
            "add John 1234567890",
            "add John 5555555555",
            "phone John",
            "change John 1234567890 0987654321",
            "phone John",
            "remove-phone John 5555555555",
            "all",
            "delete John",
            "all",
        ],
    );

    assert_eq!(
        replies,
        vec![
            "Contact added.",
            "Contact updated.",
            "Phones for John: 1234567890; 5555555555",
            "Phone number updated for John.",
            "Phones for John: 0987654321; 5555555555",
            "Phone 5555555555 removed for John.",
            "Contact name: John, phones: 0987654321",
            "Contact John deleted.",
            "No records",
        ]
    );
}

#[test]
fn test_birthday_flow() {
    let mut session = session_on("10.03.2024");

    let replies = transcript(
        &mut session,
        &[
            "birthdays",
            "add Anna 1111111111",
            "add Leo 2222222222",
            "add Max 3333333333",
            "add-birthday Anna 12.03.1990",
            "add-birthday Leo 16.03.1985",
            "add-birthday Max 01.01.2000",
            "show-birthday Leo",
            "birthdays",
        ],
    );

    assert_eq!(replies[0], "No upcoming birthdays.");
    assert_eq!(replies[4], "Birthday added for Anna.");
    assert_eq!(replies[7], "Leo's birthday is on 16.03.1985");
    assert_eq!(replies[8], "Anna: 12.03.2024\nLeo: 18.03.2024");
}

#[test]
fn test_error_replies() {
    let mut session = session_on("10.03.2024");
    session.handle_line("add John 1234567890");

    assert_eq!(session.handle_line("add John").text(), Command::Add.usage());
    assert_eq!(session.handle_line("change John").text(), Command::Change.usage());
    assert_eq!(session.handle_line("phone Jane").text(), "Contact Jane not found.");
    assert_eq!(
        session.handle_line("show-birthday Jane").text(),
        "Contact Jane not found."
    );

    let reply = session.handle_line("change John 0000000000 1111111111");
    assert!(reply
        .text()
        .starts_with("An error occurred. Please check your input."));

    let reply = session.handle_line("add-birthday John 31.02.2024");
    assert!(reply
        .text()
        .starts_with("An error occurred. Please check your input."));
    assert_eq!(
        session.handle_line("show-birthday John").text(),
        "No birthday recorded for John"
    );
}

#[test]
fn test_unknown_commands() {
    let mut session = session_on("10.03.2024");
    assert_eq!(session.handle_line("").text(), "Invalid command.");
    assert_eq!(session.handle_line("list").text(), "Invalid command.");
    assert_eq!(
        session.handle_line("Hello"),
        Reply::Continue("How can I help you?".to_string())
    );
}

#[tokio::test]
async fn test_run_until_close() {
    let mut session = session_on("10.03.2024");
    let input: &[u8] = b"add Anna 1111111111\nadd-birthday Anna 12.03.1990\nbirthdays\nclose\n";
    let mut output = Vec::new();

    run(&mut session, input, &mut output, "Enter a command: ")
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Welcome to the assistant bot!\n\
         Enter a command: Contact added.\n\
         Enter a command: Birthday added for Anna.\n\
         Enter a command: Anna: 12.03.2024\n\
         Enter a command: Good bye!\n"
    );
    assert_eq!(session.directory().len(), 1);
}
