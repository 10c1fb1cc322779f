//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise every `phonebook_core` store operation against a real file.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `phonebook_cli [DB_PATH]` (default `contacts.db`, reset on start).

use log::error;
use phonebook_core::{
    default_log_level, init_logging, sort_contacts, Contact, ContactFields, ContactStore,
    StoreConfig, StoreResult,
};
use std::process::ExitCode;

const SAMPLE_CONTACTS: &[(&str, &str, &str, &str, &str)] = &[
    ("Ivan", "Ivanov", "123-456-789", "456-789-012", "789-012-345"),
    ("Petr", "Petrov", "123-456-789", "456-789-012", "789-012-345"),
    ("Alexander", "Alexandrov", "987-654-321", "999-888-777", "789-012-345"),
    ("Kirill", "Darievich", "555-555-555", "456-789-012", "789-012-345"),
    ("Dmitry", "Evgenievich", "248-585-900", "456-789-012", "789-012-345"),
];

fn main() -> ExitCode {
    let config = std::env::args()
        .nth(1)
        .map(StoreConfig::new)
        .unwrap_or_default();

    let log_dir = std::env::temp_dir().join("phonebook-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir) {
        eprintln!("logging disabled: {err}");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("phonebook_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &StoreConfig) -> StoreResult<()> {
    println!("phonebook_core version={}", phonebook_core::core_version());
    let store = ContactStore::open(config)?;

    for &(first, last, phone1, phone2, phone3) in SAMPLE_CONTACTS {
        store.add_contact(&ContactFields::new(first, last, phone1, phone2, phone3))?;
    }
    print_section("all contacts", &store.get_all_contacts()?);

    let deleted = store.delete_contact(1)?;
    println!("deleted id=1 affected={deleted}");

    let edited = store.edit_contact(
        2,
        &ContactFields::new("New", "Surname", "111-222-333", "222-333-444", "333-444-555"),
    )?;
    println!("edited id=2 affected={edited}");

    print_section(
        "search last_name=Evgenievich",
        &store.search_by_last_name("Evgenievich")?,
    );
    print_section("search id=3", &store.search_by_id(3)?);
    print_section("all contacts after delete", &store.get_all_contacts()?);
    print_section(
        "sorted contacts after delete",
        &sort_contacts(store.get_all_contacts()?),
    );

    store.close()
}

fn print_section(title: &str, contacts: &[Contact]) {
    println!("{title}:");
    for contact in contacts {
        println!("  {contact}");
    }
}
