mod common;

use common::Book;
use predicates::prelude::*;

#[test]
fn interactive_session() -> Result<(), Box<dyn std::error::Error>> {
    let book = Book::new()?;

    book.cmd()?
        .arg("--interactive")
        .write_stdin("1\nBilly Butcher\n+777666\n3\n4\nButcher\n2\n+777666\n0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Hi! I am a phone book. what would you like to do?")
                .and(predicate::str::contains("Your Phone Book:\nBilly Butcher +777666\n"))
                .and(predicate::str::contains("Success!").not())
                .and(predicate::str::ends_with("Thanks, bye!\n")),
        );

    assert!(book.list_all()?.is_empty());
    Ok(())
}

#[test]
fn interactive_changes_persist() -> Result<(), Box<dyn std::error::Error>> {
    let book = Book::new()?;

    book.cmd()?
        .arg("--interactive")
        .write_stdin("1\nAnnie January\n+15550002\n0\n")
        .assert()
        .success();

    assert_eq!(book.list_all()?, vec!["Annie January +15550002".to_string()]);
    Ok(())
}

#[test]
fn interactive_wrong_input() -> Result<(), Box<dyn std::error::Error>> {
    let book = Book::new()?;

    book.cmd()?
        .arg("--interactive")
        .write_stdin("7\n1\n\n123abc\n0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Wrong input! Please repeat!")
                .and(predicate::str::contains("Invalid name length"))
                .and(predicate::str::contains("Bad number")),
        );

    assert!(book.list_all()?.is_empty());
    Ok(())
}

#[test]
fn interactive_ends_on_closed_input() -> Result<(), Box<dyn std::error::Error>> {
    let book = Book::new()?;

    book.cmd()?
        .arg("--interactive")
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Thanks, bye!\n"));

    Ok(())
}
