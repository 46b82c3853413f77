use game_content::{LevelCatalog, LevelSpec};
use game_core::{ActionChoice, BattleOutcome, EnemyKind, ScriptedProvider};
use runtime::{
    Difficulty, GameSession, InMemorySaveRepository, LevelReport, RunStatus, Runtime,
    RuntimeError, SaveRepository,
};

fn battle_outcome(report: &LevelReport) -> Option<BattleOutcome> {
    match report {
        LevelReport::Battle { report, .. } => Some(report.outcome),
        LevelReport::Event { .. } => None,
    }
}

/// Plays the opening of the built-in run on Easy: two battles, an event, then
/// a save and a reload.
#[test]
fn opening_levels_then_save_and_resume() {
    let mut runtime = Runtime::builder()
        .seed(42)
        .new_game(Difficulty::Easy)
        .build()
        .unwrap();

    // ================================================================
    // Level 1: a single Slim
    // ================================================================
    let report = runtime
        .play_level(&mut ScriptedProvider::attacking(2))
        .unwrap();
    assert_eq!(battle_outcome(&report), Some(BattleOutcome::Victory));
    let LevelReport::Battle { rewards, .. } = &report else {
        panic!("level 1 is a battle");
    };
    assert!(rewards.as_ref().is_some_and(|r| r.potion.is_some()));
    assert_eq!(runtime.session().potions.total(), 1);
    assert_eq!(runtime.advance().unwrap(), 2);

    // ================================================================
    // Level 2: two Slims, attacked front to back
    // ================================================================
    let report = runtime
        .play_level(&mut ScriptedProvider::attacking(4))
        .unwrap();
    assert_eq!(battle_outcome(&report), Some(BattleOutcome::Victory));
    assert_eq!(runtime.advance().unwrap(), 3);

    // ================================================================
    // Level 3: event (always positive on Easy)
    // ================================================================
    let report = runtime
        .play_level(&mut ScriptedProvider::default())
        .unwrap();
    let LevelReport::Event { outcome } = report else {
        panic!("level 3 is an event");
    };
    assert!(!outcome.is_negative());
    assert!(runtime.session().pending.is_empty());

    // ================================================================
    // Save after the event resumes at level 4
    // ================================================================
    let repository = InMemorySaveRepository::new();
    runtime.save(&repository).unwrap();
    assert!(repository.text().unwrap().starts_with("LEVEL 4\n"));

    let resumed = Runtime::builder().load(&repository).unwrap().build().unwrap();
    assert_eq!(resumed.session().level, 4);
    assert_eq!(resumed.session().difficulty, Difficulty::Easy);
    assert_eq!(
        resumed.session().player.base_attack(),
        runtime.session().player.base_attack()
    );
    assert_eq!(
        resumed.session().potions.listing(),
        runtime.session().potions.listing()
    );
}

#[test]
fn defeat_ends_the_run() {
    let catalog = LevelCatalog::new(vec![LevelSpec::battle(1, [EnemyKind::Boss])]).unwrap();
    let mut runtime = Runtime::builder()
        .catalog(catalog)
        .seed(9)
        .new_game(Difficulty::Hard)
        .build()
        .unwrap();

    let report = runtime
        .play_level(&mut ScriptedProvider::new(vec![ActionChoice::Skip; 60]))
        .unwrap();
    assert_eq!(battle_outcome(&report), Some(BattleOutcome::Defeat));
    assert_eq!(runtime.status(), RunStatus::Lost);

    assert!(matches!(
        runtime.play_level(&mut ScriptedProvider::default()),
        Err(RuntimeError::GameOver {
            status: RunStatus::Lost
        })
    ));
}

#[test]
fn clearing_the_final_level_wins_gold() {
    let catalog = LevelCatalog::new(vec![LevelSpec::battle(1, [EnemyKind::Slim])]).unwrap();
    let mut runtime = Runtime::builder()
        .catalog(catalog)
        .new_game(Difficulty::Easy)
        .build()
        .unwrap();

    runtime
        .play_level(&mut ScriptedProvider::attacking(2))
        .unwrap();
    assert_eq!(runtime.status(), RunStatus::Won);
    assert_eq!(runtime.session().gold, 1);
    assert!(runtime.advance().is_err());
}

#[test]
fn aborted_battle_keeps_level_and_curse() {
    let mut session = GameSession::new(Difficulty::Easy);
    session.pending.double_health = true;
    let mut runtime = Runtime::builder().session(session).build().unwrap();

    let report = runtime
        .play_level(&mut ScriptedProvider::default())
        .unwrap();
    assert_eq!(battle_outcome(&report), Some(BattleOutcome::Aborted));
    assert_eq!(runtime.status(), RunStatus::InProgress);
    assert!(runtime.session().pending.double_health);
    assert!(matches!(
        runtime.advance(),
        Err(RuntimeError::LevelNotCleared { level: 1 })
    ));
}

#[test]
fn curse_applies_to_next_battle_only() {
    let mut session = GameSession::new(Difficulty::Easy);
    session.pending.double_health = true;
    let mut runtime = Runtime::builder().session(session).build().unwrap();

    // Doubled Slim has 60 HP: three hits.
    let report = runtime
        .play_level(&mut ScriptedProvider::attacking(3))
        .unwrap();
    let LevelReport::Battle { report, .. } = report else {
        panic!("level 1 is a battle");
    };
    assert_eq!(report.outcome, BattleOutcome::Victory);
    assert_eq!(report.turns, 3);
    assert!(runtime.session().pending.is_empty());

    assert!(matches!(
        runtime.play_level(&mut ScriptedProvider::attacking(2)),
        Err(RuntimeError::LevelAlreadyCleared { level: 1 })
    ));
}

#[test]
fn shop_purchase_through_runtime() {
    let mut session = GameSession::new(Difficulty::Easy);
    session.gold = 2;
    let mut runtime = Runtime::builder().session(session).build().unwrap();

    runtime.buy(game_content::ShopItem::Coke).unwrap();
    runtime.buy(game_content::ShopItem::Coke).unwrap();
    assert_eq!(runtime.session().player.base_attack(), 45);
    assert!(matches!(
        runtime.buy(game_content::ShopItem::Hamburger),
        Err(RuntimeError::InsufficientGold { .. })
    ));
}

#[test]
fn loading_without_a_save_fails() {
    let repository = InMemorySaveRepository::new();
    assert!(!repository.exists());
    assert!(matches!(
        Runtime::builder().load(&repository),
        Err(RuntimeError::NoSave)
    ));
}
