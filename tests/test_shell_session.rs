//! Scripted sessions driven through `shell::run` over in-memory buffers.

use contact_book::{shell, AddressBook};
use std::io::Cursor;

const PROMPT: &str = ">>> ";

fn session(book: &mut AddressBook, script: &str) -> String {
    let mut output = Vec::new();
    shell::run(book, Cursor::new(script), &mut output, PROMPT).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_full_session() {
    let mut book = AddressBook::new();
    let script = "\
hello
add Alice 1234567
new number Alice 7654321
change Alice 1234567 1112223
phone Alice
show all
exit
add Bob 5555555
";

    let output = session(&mut book, script);

    assert!(output.contains("How can I help you?"));
    assert!(output.contains("Contact Alice added to the address book!"));
    assert!(output.contains("Phone 7654321 added to contact Alice"));
    assert!(output.contains("Phone number 1234567 updated to 1112223 for contact Alice"));
    assert!(output.contains("Name: Alice\nPhones: 1112223, 7654321"));
    assert!(output.contains("--- Page 1/1 ---"));
    assert!(output.trim_end().ends_with("Goodbye!"));

    // Nothing after exit is executed.
    assert!(!book.contains("Bob"));
    assert_eq!(book.len(), 1);
}

#[test]
fn test_errors_are_printed_not_fatal() {
    let mut book = AddressBook::new();
    let script = "\
add Alice
add Alice 12-34
jump
phone Nobody
add Alice 1234567
";

    let output = session(&mut book, script);

    assert!(output.contains("Not enough params. Print help"));
    assert!(output.contains("Invalid phone number: 12-34"));
    assert!(output.contains("Unknown command, try again!"));
    assert!(output.contains("Contact Nobody not found in the address book!"));
    assert!(book.contains("Alice"));
}

#[test]
fn test_end_of_input_stops_loop() {
    let mut book = AddressBook::new();
    let output = session(&mut book, "add Alice 1234567\n\n   \n");

    assert_eq!(book.len(), 1);
    // Initial prompt plus one per line read.
    assert_eq!(output.matches(PROMPT).count(), 4);
}

#[test]
fn test_show_all_pages() {
    let mut book = AddressBook::with_page_size(2);
    let script = "\
add Ann 1111111
add Ben 2222222
add Cat 3333333
show all
";

    let output = session(&mut book, script);

    assert!(output.contains("--- Page 1/2 ---"));
    assert!(output.contains("--- Page 2/2 ---"));
    let page_two = output.find("--- Page 2/2 ---").unwrap();
    assert!(output[page_two..].contains("Name: Cat"));
    assert!(!output[page_two..].contains("Name: Ann"));
}

#[test]
fn test_birthday_commands() {
    let mut book = AddressBook::new();
    let script = "\
add Alice 1234567
birthday Alice
birthday Alice 1990-02-30
birthday Alice 1990-05-17
find Alice
";

    let output = session(&mut book, script);

    assert!(output.contains("Birthday for Alice is not set"));
    assert!(output.contains("Invalid birthday: 1990-02-30"));
    assert!(output.contains("Birthday 1990-05-17 saved for contact Alice"));
    assert!(output.contains("Birthday: 1990-05-17"));
}

#[test]
fn test_change_onto_existing_phone_is_rejected() {
    let mut book = AddressBook::new();
    let script = "\
add Alice 1111111
new number Alice 2222222
change Alice 1111111 2222222
phone Alice
";

    let output = session(&mut book, script);

    assert!(output.contains("Phone already in list"));
    assert!(output.contains("Phones: 1111111, 2222222"));
    assert_eq!(book.get("Alice").unwrap().phone_count(), 2);
}

#[test]
fn test_extra_arguments_are_rejected() {
    let mut book = AddressBook::new();
    let script = "\
add Alice 1234567
add Bob 7654321 1990-05-17 junk
remove Alice Bob
";

    let output = session(&mut book, script);

    assert_eq!(output.matches("Too many params. Print help").count(), 2);
    assert!(book.contains("Alice"));
    assert!(!book.contains("Bob"));
}
