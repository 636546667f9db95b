use recipe_catalog::{CatalogError, Ingredient, Recipe, RecipeRepository};
use std::fs;
use std::path::Path;

const UNSORTED: &str = "\
[Recept]
Sockerkaka
[Ingredienser]
3;st;ägg
3;dl;strösocker
1/2;tsk;bakpulver
[Instruktioner]
Sätt ugnen på 175 grader.
Vispa ägg och socker poröst.
[Recept]
Köttbullar
[Ingredienser]
500;g;blandfärs
en kruka;;persilja
[Instruktioner]
Blanda allt.
Rulla bullar och stek dem.
[Recept]
Pannkakor
[Ingredienser]
3;dl;vetemjöl
[Instruktioner]
Stek tunna pannkakor.
";

fn write_catalog(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("recept.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_save_then_load_reproduces_collection() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_catalog(dir.path(), UNSORTED);
    let saved = dir.path().join("sparade.txt");

    let mut first = RecipeRepository::new(&source, &saved);
    first.load().unwrap();
    first.save().unwrap();

    let mut second = RecipeRepository::with_path(&saved);
    second.load().unwrap();

    let before: Vec<Recipe> = first.get_all().collect();
    let after: Vec<Recipe> = second.get_all().collect();
    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(&after) {
        assert!(a.same_content(b), "{:?} != {:?}", a, b);
    }
}

#[test]
fn test_saved_file_is_sorted_and_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), UNSORTED);

    let mut repository = RecipeRepository::with_path(&path);
    repository.load().unwrap();
    repository.save().unwrap();

    let saved = fs::read_to_string(&path).unwrap();
    let koettbullar = saved.find("Köttbullar").unwrap();
    let pannkakor = saved.find("Pannkakor").unwrap();
    let sockerkaka = saved.find("Sockerkaka").unwrap();
    assert!(koettbullar < pannkakor && pannkakor < sockerkaka);
    assert!(saved.contains("1/2;tsk;bakpulver\n"));
    assert!(saved.contains("en kruka;;persilja\n"));
}

#[test]
fn test_load_sorts_any_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), UNSORTED);

    let mut repository = RecipeRepository::with_path(path);
    assert_eq!(repository.load().unwrap(), 3);

    let names: Vec<String> = repository.get_all().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["Köttbullar", "Pannkakor", "Sockerkaka"]);
}

#[test]
fn test_save_after_delete_writes_remaining_recipes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), UNSORTED);

    let mut repository = RecipeRepository::with_path(&path);
    repository.load().unwrap();
    repository.delete_at(1).unwrap();
    repository.save().unwrap();

    let mut reloaded = RecipeRepository::with_path(&path);
    reloaded.load().unwrap();
    let names: Vec<String> = reloaded.get_all().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["Köttbullar", "Sockerkaka"]);
}

#[test]
fn test_ingredient_order_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), UNSORTED);

    let mut repository = RecipeRepository::with_path(path);
    repository.load().unwrap();

    let cake = repository.get_at(2).unwrap();
    assert_eq!(
        cake.ingredients(),
        &[
            Ingredient::new("3", "st", "ägg"),
            Ingredient::new("3", "dl", "strösocker"),
            Ingredient::new("1/2", "tsk", "bakpulver"),
        ]
    );
    assert_eq!(cake.instructions()[0], "Sätt ugnen på 175 grader.");
}

#[test]
fn test_save_to_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut repository = RecipeRepository::new(
        dir.path().join("recept.txt"),
        dir.path().join("saknas").join("recept.txt"),
    );

    assert!(matches!(repository.save(), Err(CatalogError::Io { .. })));
}

#[test]
fn test_load_file_with_byte_order_mark_and_crlf() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        dir.path(),
        "\u{feff}[Recept]\r\nPannkakor\r\n[Ingredienser]\r\n3;dl;mjöl\r\n[Instruktioner]\r\nStek.\r\n",
    );

    let mut repository = RecipeRepository::with_path(&path);
    assert_eq!(repository.load().unwrap(), 1);

    let pancakes = repository.get_at(0).unwrap();
    assert_eq!(pancakes.name(), "Pannkakor");
    assert_eq!(pancakes.ingredients(), &[Ingredient::new("3", "dl", "mjöl")]);
    assert_eq!(pancakes.instructions(), &["Stek.".to_string()]);

    repository.save().unwrap();
    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("[Recept]\nPannkakor\n"));
}
