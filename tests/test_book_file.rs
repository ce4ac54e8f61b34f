use std::fs;

use recipe_book::{
    load_book, save_book, BookError, BookFile, Ingredient, MemoryStorage, Recipe, RecipeBook,
};

fn sample_book() -> RecipeBook {
    RecipeBook::from(vec![
        Recipe::new(
            "Оливье",
            "Салаты",
            vec![
                Ingredient::new("Картофель", "3 шт"),
                Ingredient::new("Горошек", "1 банка"),
            ],
            vec!["Нарезать".to_string(), "Перемешать".to_string()],
        ),
        Recipe::new(
            "Компот",
            "Напитки",
            vec![Ingredient::new("Ягоды", "")],
            vec!["Сварить".to_string()],
        ),
    ])
}

#[test]
fn test_save_and_load_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.txt");

    let mut book = sample_book();
    book.set_favourite("компот");
    save_book(&path, &book).unwrap();

    let favourites_path = dir.path().join("book(favourite).txt");
    let main = fs::read_to_string(&path).unwrap();
    let favourites = fs::read_to_string(&favourites_path).unwrap();
    assert!(main.contains("Название рецепта: Оливье"));
    assert!(main.contains("\tКартофель - 3 шт\n"));
    assert!(favourites.starts_with("Название рецепта: Компот\n"));
    assert!(!favourites.contains("Оливье"));

    let loaded = load_book(&path).unwrap();
    assert_eq!(loaded, book);
}

#[test]
fn test_failed_parse_keeps_previous_book() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.txt");
    save_book(&path, &sample_book()).unwrap();

    let mut current = load_book(&path).unwrap();

    fs::write(&path, "Название рецепта: Сломанный\nИнструкция:\n").unwrap();
    match load_book(&path) {
        Ok(book) => current = book,
        Err(BookError::Parse(_)) => {}
        Err(e) => panic!("Unexpected error: {}", e),
    }
    assert_eq!(current, sample_book());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_book(dir.path().join("nothing.txt")),
        Err(BookError::NotFound(_))
    ));
}

#[test]
fn test_failed_write_keeps_in_memory_book() {
    let storage = MemoryStorage::new().read_only(true);
    let mut file = BookFile::with_storage("book.txt", storage);

    let mut book = sample_book();
    book.add(Recipe::new("Чай", "Напитки", vec![], vec![]));

    let err = file.save(&book).unwrap_err();
    assert!(err.to_string().starts_with("Failed to write book.txt"));
    assert_eq!(book.len(), 3);
}

#[test]
fn test_unreadable_recipe_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.txt");
    save_book(&path, &sample_book()).unwrap();

    let mut book = load_book(&path).unwrap();
    book.add(Recipe::new(
        "Плов",
        "Горячее",
        vec![Ingredient::new("Рис", "500 г")],
        vec!["Варить 10 мин: не мешать".to_string()],
    ));

    let err = save_book(&path, &book).unwrap_err();
    assert!(matches!(err, BookError::Unreadable(_)));
    assert!(err.to_string().starts_with("Refusing to save"));

    // The book on disk still loads
    assert_eq!(load_book(&path).unwrap(), sample_book());
}

#[test]
fn test_unfavourite_sticks_without_favourites_document() {
    let storage = MemoryStorage::new();
    let mut file = BookFile::with_storage("book.txt", storage);

    let mut book = sample_book();
    book.set_favourite("Компот");
    file.save(&book).unwrap();

    let mut file = BookFile::with_storage("book.txt", file.storage().clone())
        .write_favourites(false);
    book.unset_favourite("Компот");
    file.save(&book).unwrap();

    let loaded = file.load().unwrap();
    assert!(loaded.favourites().is_empty());
}

#[test]
fn test_duplicate_favourites_are_restored_one_to_one() {
    let twin = Recipe::new("Чай", "Напитки", vec![], vec!["Заварить".to_string()]);
    let mut book = RecipeBook::from(vec![twin.clone(), twin.clone(), twin]);
    assert!(book.set_favourite("чай"));

    let mut file = BookFile::with_storage("tea.txt", MemoryStorage::new());
    file.save(&book).unwrap();

    let loaded = file.load().unwrap();
    assert_eq!(loaded.favourites().len(), 1);
    // Restored onto the first recipe with matching content
    assert!(loaded.recipes()[0].favourite);
}
