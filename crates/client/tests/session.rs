use game_content::{LevelCatalog, LevelSpec};
use game_core::EnemyKind;
use gauntlet_client::{App, Console};
use runtime::{FileSaveRepository, SaveRepository};

fn slim_levels(count: u32) -> LevelCatalog {
    LevelCatalog::new(
        (1..=count)
            .map(|number| LevelSpec::battle(number, [EnemyKind::Slim]))
            .collect(),
    )
    .unwrap()
}

/// Runs a whole session against typed input and returns what was printed.
fn play(input: &str, catalog: LevelCatalog, save_file: &std::path::Path) -> String {
    let repository = FileSaveRepository::new(save_file).unwrap();
    let mut app = App::new(Console::new(input.as_bytes(), Vec::new()), Box::new(repository))
        .with_catalog(catalog);
    app.run().unwrap();

    let (_, output) = app.into_console().into_parts();
    String::from_utf8(output).unwrap()
}

#[test]
fn winning_the_only_level_completes_the_run() {
    let dir = tempfile::tempdir().unwrap();
    // new game, easy, two attacks, no shop, exit
    let output = play("1\n1\n1\n1\nn\n3\n", slim_levels(1), &dir.path().join("save"));

    assert!(output.contains("=== New Game Started ==="));
    assert!(output.contains("LEVEL 1/1"));
    assert!(output.contains("=== VICTORY! ==="));
    assert!(output.contains("Reward: "));
    assert!(output.contains("CONGRATULATIONS!"));
    assert!(output.contains("You earned 1 gold coin(s)!"));
    assert!(output.ends_with("Thank you for playing! Goodbye!\n"));
}

#[test]
fn save_then_load_resumes_at_next_level() {
    let dir = tempfile::tempdir().unwrap();
    let save_file = dir.path().join("gauntlet.sav");

    // new game, hard, win level 1, save, exit to menu, quit
    let output = play("1\n2\n1\n1\n2\n4\n3\n", slim_levels(2), &save_file);
    assert!(output.contains("Game saved successfully!"));

    let saved = FileSaveRepository::new(&save_file).unwrap().load().unwrap().unwrap();
    assert_eq!(saved.level, 2);
    assert_eq!(saved.difficulty, runtime::Difficulty::Hard);

    // load, win level 2, decline shop, quit
    let output = play("2\n1\n1\nn\n3\n", slim_levels(2), &save_file);
    assert!(output.contains("Game loaded successfully!\nCurrent Level: 2\nDifficulty: Hard"));
    assert!(output.contains("LEVEL 2/2"));
    assert!(output.contains("CONGRATULATIONS!"));
}

#[test]
fn loading_without_a_save_returns_to_the_menu() {
    let dir = tempfile::tempdir().unwrap();
    let output = play("2\n3\n", slim_levels(1), &dir.path().join("missing.sav"));

    assert!(output.contains("No save file found!"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn shop_refuses_without_gold() {
    let dir = tempfile::tempdir().unwrap();
    // new game, easy, win level 1, shop, coke, leave, exit to menu, quit
    let output = play(
        "1\n1\n1\n1\n3\n2\n3\n4\n3\n",
        slim_levels(2),
        &dir.path().join("save"),
    );

    assert!(output.contains("=== SHOP ==="));
    assert!(output.contains("2. Coke - Permanently increase Attack by 10 (Cost: 1 gold)"));
    assert!(output.contains("Purchase failed! Insufficient gold."));
    assert!(output.contains("Leaving shop..."));
}

#[test]
fn closed_input_mid_battle_retreats_and_stops() {
    let dir = tempfile::tempdir().unwrap();
    let output = play("1\n1\n1\n", slim_levels(2), &dir.path().join("save"));

    assert!(output.contains("You flee from the battle."));
    assert!(output.contains("You retreat."));
    assert!(!output.contains("Goodbye!"));
}
