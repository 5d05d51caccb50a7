//! Fixture tests for the structure repair against realistic locale documents.

use localefix_repair::{ApplyOptions, RepairOp, repair_file, repair_structure};
use camino::Utf8PathBuf;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const MISNESTED_RU: &str = concat!(
    "{\n",
    "  \"common\": {\n",
    "    \"search\": \"Поиск\",\n",
    "    \"calculate\": \"Рассчитать\"\n",
    "  },\n",
    "  \"calculators\": {\n",
    "    \"bmi\": {\n",
    "      \"title\": \"Индекс массы тела\",\n",
    "      \"description\": \"Расчёт ИМТ\"\n",
    "    },\n",
    "  }\n",
    "  \"mortgage\": {\n",
    "    \"title\": \"Ипотечный калькулятор\",\n",
    "    \"fields\": {\n",
    "      \"rate\": \"Ставка\"\n",
    "    }\n",
    "  },\n",
    "  \"deposit\": { \"title\": \"Вклады\" }\n",
    "}\n",
);

const REPAIRED_RU: &str = concat!(
    "{\n",
    "  \"common\": {\n",
    "    \"search\": \"Поиск\",\n",
    "    \"calculate\": \"Рассчитать\"\n",
    "  },\n",
    "  \"calculators\": {\n",
    "    \"bmi\": {\n",
    "      \"title\": \"Индекс массы тела\",\n",
    "      \"description\": \"Расчёт ИМТ\"\n",
    "    },\n",
    "    \"mortgage\": {\n",
    "      \"title\": \"Ипотечный калькулятор\",\n",
    "      \"fields\": {\n",
    "        \"rate\": \"Ставка\"\n",
    "      }\n",
    "    },\n",
    "    \"deposit\": { \"title\": \"Вклады\" }\n",
    "  }\n",
    "}\n",
);

#[test]
fn repairs_realistic_locale_document() {
    let repair = repair_structure(MISNESTED_RU);
    assert_eq!(repair.text, REPAIRED_RU);

    let value: serde_json::Value = serde_json::from_str(&repair.text).expect("output parses");
    let calculators = value["calculators"].as_object().expect("calculators");
    assert!(calculators.contains_key("bmi"));
    assert!(calculators.contains_key("mortgage"));
    assert!(calculators.contains_key("deposit"));
    assert_eq!(value["common"]["search"], "Поиск");
}

#[test]
fn second_pass_is_byte_identical() {
    let repair = repair_structure(REPAIRED_RU);
    assert_eq!(repair.text, REPAIRED_RU);
    assert_eq!(repair.relocated_lines, 0);
}

#[test]
fn sections_before_calculators_are_untouched() {
    let repair = repair_structure(MISNESTED_RU);
    assert!(repair.text.starts_with(
        "{\n  \"common\": {\n    \"search\": \"Поиск\",\n    \"calculate\": \"Рассчитать\"\n  },\n"
    ));
}

#[test]
fn repair_file_round_trips_on_disk() {
    let temp = TempDir::new().expect("temp dir");
    let path = Utf8PathBuf::from_path_buf(temp.path().join("ru.json")).expect("utf8");
    std::fs::write(&path, MISNESTED_RU).expect("write fixture");

    let opts = ApplyOptions {
        backup_enabled: false,
        ..ApplyOptions::default()
    };
    let repair = repair_file(&path, &RepairOp::FixStructure, &opts).expect("repair");

    assert!(repair.written);
    assert!(repair.backup_path.is_none());
    assert_eq!(std::fs::read_to_string(&path).expect("read"), REPAIRED_RU);

    // Second run over the repaired file is a no-op and writes nothing.
    let again = repair_file(&path, &RepairOp::FixStructure, &opts).expect("repair again");
    assert!(!again.changed());
    assert!(!again.written);
}
