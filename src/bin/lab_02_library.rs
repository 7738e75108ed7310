use oop_labs::config::DemoConfig;
use oop_labs::library::Library;
use oop_labs::{console, logging, LabError};

fn main() -> Result<(), LabError> {
    logging::init();
    let config = DemoConfig::from_env().with_catalog_arg(std::env::args().nth(1));
    config.apply();

    println!("{}", console::section("Empty library"));
    let empty_library = Library::default();
    println!("{}", console::value("next id", empty_library.get_next_book_id()?));

    let library = match &config.catalog {
        Some(path) => Library::from_path(path)?,
        None => Library::bundled()?,
    };

    println!("{}", console::section("Library with books"));
    for book in library.books() {
        println!("{}", console::value(&book.to_string(), book.repr()));
    }
    println!("{}", console::value("next id", library.get_next_book_id()?));
    println!("{}", console::outcome("index of id 1", &library.get_index_by_book_id(1)));

    let missing = library.get_next_book_id()?;
    println!(
        "{}",
        console::outcome(&format!("index of id {missing}"), &library.get_index_by_book_id(missing))
    );

    Ok(())
}
