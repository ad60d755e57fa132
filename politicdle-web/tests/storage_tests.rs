#![cfg(target_arch = "wasm32")]

use politicdle_web::game::{
    CompassDirection, GUESS_ARCHIVE_KEY, Guess, GuessArchive, GuessList, GuessStorage,
    WebGuessStorage,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_archive() -> GuessArchive {
    let mut archive = GuessArchive::new();
    let mut guesses = GuessList::new();
    guesses.push(Guess {
        name: "Amiens".to_string(),
        distance: 113_000,
        direction: Some(CompassDirection::SouthWest),
    });
    guesses.push(Guess {
        name: "Poissy".to_string(),
        distance: 0,
        direction: None,
    });
    archive.set_day("2022-04-12-2", guesses);
    archive
}

#[wasm_bindgen_test]
fn archive_roundtrips_through_local_storage() {
    let storage = WebGuessStorage;
    storage.save_archive(&sample_archive()).expect("save archive");

    let loaded = storage.load_archive().expect("load archive");
    let day = loaded.day("2022-04-12-2");
    assert_eq!(day.len(), 2);
    assert_eq!(day[0].name, "Amiens");
    assert_eq!(day[0].direction, Some(CompassDirection::SouthWest));
    assert_eq!(day[1].distance, 0);
}

#[wasm_bindgen_test]
fn missing_entry_loads_as_empty_archive() {
    let window = web_sys::window().unwrap();
    let raw = window.local_storage().unwrap().unwrap();
    raw.remove_item(GUESS_ARCHIVE_KEY).unwrap();

    let loaded = WebGuessStorage.load_archive().expect("load archive");
    assert!(loaded.is_empty());
}

#[wasm_bindgen_test]
fn corrupt_entry_loads_as_empty_archive() {
    let window = web_sys::window().unwrap();
    let raw = window.local_storage().unwrap().unwrap();
    raw.set_item(GUESS_ARCHIVE_KEY, "{not json").unwrap();

    let loaded = WebGuessStorage.load_archive().expect("load archive");
    assert!(loaded.is_empty());
}
