use game_core::{EquipmentKind, PotionKind, PotionStack};
use runtime::{Difficulty, FileSaveRepository, RepositoryError, SaveData, SaveRepository};

fn sample() -> SaveData {
    SaveData {
        level: 7,
        difficulty: Difficulty::Hard,
        base_max_health: 140,
        current_health: 61,
        base_attack: 35,
        gold: 2,
        boss_attack_bonus: 30,
        equipment: vec![EquipmentKind::Shoes],
        potions: vec![
            PotionStack {
                kind: PotionKind::Strength,
                quantity: 1,
            },
            PotionStack {
                kind: PotionKind::Mystery,
                quantity: 3,
            },
        ],
    }
}

#[test]
fn save_load_delete_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileSaveRepository::new(dir.path().join("saves/gauntlet.sav")).unwrap();

    assert!(!repository.exists());
    assert_eq!(repository.load().unwrap(), None);

    repository.save(&sample()).unwrap();
    assert!(repository.exists());
    assert_eq!(repository.load().unwrap(), Some(sample()));

    // No temp file left behind after the rename.
    let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("saves"))
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());

    repository.delete().unwrap();
    assert!(!repository.exists());
    repository.delete().unwrap();
}

#[test]
fn overwrites_previous_save() {
    let dir = tempfile::tempdir().unwrap();
    let repository = FileSaveRepository::new(dir.path().join("gauntlet.sav")).unwrap();

    repository.save(&sample()).unwrap();
    let mut later = sample();
    later.level = 9;
    later.equipment.push(EquipmentKind::Shield);
    repository.save(&later).unwrap();

    assert_eq!(repository.load().unwrap(), Some(later));
}

#[test]
fn hand_edited_garbage_is_corrupted_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gauntlet.sav");
    std::fs::write(&path, "LEVEL five\n").unwrap();

    let repository = FileSaveRepository::new(&path).unwrap();
    assert!(matches!(
        repository.load(),
        Err(RepositoryError::CorruptedData(_))
    ));
}
