use std::fs;
use std::path::Path;

use question_pairs::{load_datasets, CellValue, ColumnType, Config, LoadError, Table};
use tempfile::TempDir;

fn write_dataset_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in files {
        fs::write(dir.path().join(name), body).unwrap();
    }
    dir
}

fn quora_like_dir() -> TempDir {
    write_dataset_dir(&[
        ("train.csv", "id,text\n1,a\n2,b\n"),
        ("test.csv", "id,text\n3,c\n"),
        ("test_2.csv", "id,text\n4,d\n"),
    ])
}

fn brian(dir: &Path) -> Config {
    Config::default().with_user("Brian", dir)
}

#[test]
fn loads_three_tables_in_order() {
    let dir = quora_like_dir();
    let (train, test_1, test_2): (Table, Table, Table) =
        load_datasets(&brian(dir.path()), "Brian").unwrap().into();

    assert_eq!(train.shape(), (2, 2));
    assert_eq!(test_1.shape(), (1, 2));
    assert_eq!(test_2.shape(), (1, 2));

    assert_eq!(train.column_names(), vec!["id", "text"]);
    assert_eq!(train.column("id").unwrap().dtype, ColumnType::Integer);
    assert_eq!(test_1.column("id").unwrap().values, vec![CellValue::Integer(3)]);
    assert_eq!(test_2.column("text").unwrap().values, vec![CellValue::String("d".into())]);
}

#[test]
fn unmapped_user_fails_before_touching_files() {
    // The mapped directory does not exist; reaching the filesystem would
    // surface as MissingFile instead.
    let config = Config::default().with_user("Brian", "/nonexistent/qqp");

    let err = load_datasets(&config, "Yuchi").unwrap_err();
    match err {
        LoadError::UnknownUser { user } => assert_eq!(user, "Yuchi"),
        other => panic!("expected UnknownUser, got {other:?}"),
    }
}

#[test]
fn missing_file_fails_the_whole_load() {
    for missing in ["train.csv", "test.csv", "test_2.csv"] {
        let dir = quora_like_dir();
        fs::remove_file(dir.path().join(missing)).unwrap();

        let err = load_datasets(&brian(dir.path()), "Brian").unwrap_err();
        match err {
            LoadError::MissingFile { path } => assert_eq!(path, dir.path().join(missing)),
            other => panic!("expected MissingFile for {missing}, got {other:?}"),
        }
    }
}

#[test]
fn unreadable_file_is_an_io_error() {
    let dir = quora_like_dir();
    let test_path = dir.path().join("test.csv");
    fs::remove_file(&test_path).unwrap();
    fs::create_dir(&test_path).unwrap();

    let err = load_datasets(&brian(dir.path()), "Brian").unwrap_err();
    match err {
        LoadError::Io { path, .. } => assert_eq!(path, test_path),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn malformed_csv_is_reported() {
    let dir = write_dataset_dir(&[
        ("train.csv", "id,text\n1,a\n2,b,extra\n"),
        ("test.csv", "id,text\n3,c\n"),
        ("test_2.csv", "id,text\n4,d\n"),
    ]);
    let err = load_datasets(&brian(dir.path()), "Brian").unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }), "got {err:?}");
}

#[test]
fn empty_file_is_malformed() {
    let dir = write_dataset_dir(&[
        ("train.csv", "id,text\n1,a\n"),
        ("test.csv", ""),
        ("test_2.csv", "id,text\n4,d\n"),
    ]);
    let err = load_datasets(&brian(dir.path()), "Brian").unwrap_err();
    match err {
        LoadError::Malformed { path, .. } => assert_eq!(path, dir.path().join("test.csv")),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn repeated_loads_have_identical_shape() {
    let dir = quora_like_dir();
    let config = brian(dir.path());

    let first = load_datasets(&config, "Brian").unwrap();
    let second = load_datasets(&config, "Brian").unwrap();

    assert_eq!(first.shapes(), second.shapes());
    assert_eq!(first.train.column_names(), second.train.column_names());
    assert_eq!(first, second);
}

#[test]
fn question_pair_layout_with_blank_questions() {
    let dir = write_dataset_dir(&[
        (
            "train.csv",
            "id,qid1,qid2,question1,question2,is_duplicate\n\
             0,1,2,\"What is Rust?\",\"What's Rust?\",1\n\
             1,3,4,\"How do I learn, fast?\",Why?,0\n",
        ),
        ("test.csv", "test_id,question1,question2\n0,How?,\n"),
        ("test_2.csv", "test_id,question1,question2\n0,Why?,What?\n"),
    ]);
    let ds = load_datasets(&brian(dir.path()), "Brian").unwrap();

    assert_eq!(ds.shapes(), [(2, 6), (1, 3), (1, 3)]);
    assert_eq!(ds.train.column("is_duplicate").unwrap().dtype, ColumnType::Integer);
    assert_eq!(
        ds.train.row(1).unwrap()[3],
        &CellValue::String("How do I learn, fast?".into())
    );
    assert_eq!(ds.test_1.column("question2").unwrap().null_count(), 1);
}
