use std::io::Cursor;

use memmatch::{Session, SessionEnd};
use memmatch_core::*;

/// Runs a session over scripted input and returns how it ended plus everything it printed.
fn play<G: DeckGenerator>(
    script: &str,
    generator: G,
    level: Level,
) -> (SessionEnd, Level, String) {
    let mut output = Vec::new();
    let input = Cursor::new(script.to_owned());
    let mut session = Session::new(input, &mut output, generator, level);
    let end = session.run().unwrap();
    let level = session.level();
    drop(session);
    (end, level, String::from_utf8(output).unwrap())
}

#[test]
fn two_pairs_win_with_twenty_then_decline() {
    // ordered 2x2 deck is A A / B B
    let (end, level, output) = play("1 2\n3 4\n0\n", OrderedDeckGenerator, Level::FIRST);

    assert_eq!(end, SessionEnd::Declined);
    assert_eq!(level, Level::FIRST);
    assert!(output.contains("Matched A! +10 points"));
    assert!(output.contains("Matched B! +10 points"));
    assert!(output.contains(
        "Congratulations! You've matched all the cards. Your final score is 20.\nThanks for playing!\n"
    ));
    assert!(output.contains("\nCurrent Board (Score: 10):\nA A \nB B \n"));
    assert!(output.ends_with("Do you want to try the next level? (1 for Yes, 0 for No): "));
}

#[test]
fn quitting_reports_score_and_skips_continue_prompt() {
    let (end, _, output) = play("1\n2\n0\n", OrderedDeckGenerator, Level::FIRST);

    assert_eq!(end, SessionEnd::Quit);
    assert!(output.ends_with("Quitting the game. Your final score is 10.\n"));
    assert!(!output.contains("next level"));
}

#[test]
fn mismatch_is_shown_then_hidden() {
    let (end, _, output) = play("1 3\n0\n", OrderedDeckGenerator, Level::FIRST);

    assert_eq!(end, SessionEnd::Quit);
    assert!(output.contains("\nCurrent Board (Score: 0):\nA * \nB * \n\n"));
    assert!(output.ends_with(
        "\nCurrent Board (Score: 0):\n* * \n* * \n\nEnter the index of the card (1-4), or enter 0 to quit: Quitting the game. Your final score is 0.\n"
    ));
}

#[test]
fn bad_selections_reprompt_without_changes() {
    let script = "x 1\n1\n1\n9\n-2\n2\n0\n";
    let (end, _, output) = play(script, OrderedDeckGenerator, Level::FIRST);

    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(
        output
            .matches("Invalid input. Please enter a valid index (1-4) or 0 to quit.")
            .count(),
        1
    );
    // the 1 after x is dropped with its line, then a repeat of 1, then 9 and -2 out of range
    assert_eq!(output.matches("Invalid index. Try again.").count(), 3);
    // the repeated pick leaves card 1 as the only open card
    assert!(output.contains(
        "Invalid index. Try again.\n\nCurrent Board (Score: 0):\nA * \n* * \n\n"
    ));
    assert!(output.ends_with("Quitting the game. Your final score is 10.\n"));
}

#[test]
fn continue_with_two_ends_without_advancing() {
    let (end, level, output) = play("1 2 3 4\n2\n", OrderedDeckGenerator, Level::FIRST);

    assert_eq!(end, SessionEnd::Declined);
    assert_eq!(level, Level::FIRST);
    assert!(!output.contains("Starting Level"));
}

#[test]
fn unparsable_continue_fails() {
    let (end, _, output) = play("1 2 3 4\nyes\n", OrderedDeckGenerator, Level::FIRST);

    assert_eq!(end, SessionEnd::InvalidContinue);
    assert_eq!(end.exit_status(), 1);
    assert!(output.ends_with("Invalid input. Exiting.\n"));
}

#[test]
fn closed_input_at_continue_fails() {
    let (end, _, _) = play("1 2 3 4\n", OrderedDeckGenerator, Level::FIRST);

    assert_eq!(end, SessionEnd::InvalidContinue);
}

#[test]
fn closed_input_during_level_quits() {
    let (end, _, output) = play("1\n", OrderedDeckGenerator, Level::FIRST);

    assert_eq!(end, SessionEnd::Quit);
    assert!(output.ends_with("Quitting the game. Your final score is 0.\n"));
}

#[test]
fn winning_advances_to_odd_board_with_filler() {
    // level 3 ordered deck: A A B / B C C / D D $
    let script = "1 2 3 4\n1\n1 2 3 4 5 6 7 8 9\n0\n";
    let (end, level, output) = play(script, OrderedDeckGenerator, Level::FIRST);

    assert_eq!(end, SessionEnd::Declined);
    assert_eq!(level, Level::new(3).unwrap());
    assert!(output.contains("Starting Level 3\n"));
    assert!(output.contains("Enter the index of the card (1-9), or enter 0 to quit: "));
    assert!(output.contains("\nCurrent Board (Score: 40):\nA A B \nB C C \nD D $ \n\n"));
    assert!(output.contains("Your final score is 40."));
}

#[test]
fn largest_level_completes_session() {
    // 5x5 ordered deck pairs cells 1-2, 3-4, ... 23-24 and leaves the filler at 25
    let picks: Vec<String> = (1..=25).map(|pick| pick.to_string()).collect();
    let script = format!("{}\n", picks.join(" "));
    let (end, level, output) = play(&script, OrderedDeckGenerator, Level::LAST);

    assert_eq!(end, SessionEnd::Completed);
    assert_eq!(end.exit_status(), 0);
    assert_eq!(level, Level::LAST);
    assert!(output.contains("Your final score is 120."));
    assert!(output.ends_with("You've cleared the largest board. Thanks for playing!\n"));
}

#[test]
fn seeded_sessions_deal_identically() {
    let script = "1 2 3 4 0\n";
    let (_, _, first) = play(script, ShuffledDeckGenerator::from_seed(99), Level::FIRST);
    let (_, _, second) = play(script, ShuffledDeckGenerator::from_seed(99), Level::FIRST);

    assert_eq!(first, second);
}
