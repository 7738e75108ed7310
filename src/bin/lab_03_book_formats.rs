use oop_labs::books::{describe_shelf, shelf_entry, AudioBook, BookFormat, PaperBook};
use oop_labs::config::DemoConfig;
use oop_labs::{console, logging, LabError};
use serde_json::json;

fn main() -> Result<(), LabError> {
    logging::init();
    DemoConfig::from_env().apply();

    println!("{}", console::section("Formats"));
    let mut paper = PaperBook::new("The Master and Margarita", "Mikhail Bulgakov", 480)?;
    let mut audio = AudioBook::new("The Master and Margarita", "Mikhail Bulgakov", 17.5)?;
    println!("{}", console::value("paper", &paper));
    println!("{}", console::value("audio", &audio));
    println!("{}", console::value("author", paper.author()));
    println!("{}", console::value("repr", paper.repr()));
    println!("{}", console::value("repr", audio.repr()));

    println!("{}", console::section("Validated setters"));
    println!("{}", console::outcome("pages = 512", &paper.set_pages(512).map(|_| paper.pages())));
    println!("{}", console::outcome("pages = 0", &paper.set_pages(0).map(|_| paper.pages())));
    println!("{}", console::outcome("duration = -1", &audio.set_duration(-1.0).map(|_| audio.duration())));

    println!("{}", console::section("Shelf"));
    let records = [
        json!({"name": "Anna Karenina", "author": "Leo Tolstoy"}),
        json!({"format": "paper", "name": "Dead Souls", "author": "Nikolai Gogol", "pages": 352}),
        json!({"format": "audio", "name": "Fathers and Sons", "author": "Ivan Turgenev", "duration": 8.25}),
    ];
    let shelf = records
        .iter()
        .map(shelf_entry)
        .collect::<Result<Vec<Box<dyn BookFormat>>, _>>()?;
    for line in describe_shelf(&shelf) {
        println!("  {line}");
    }

    let bad = json!({"format": "paper", "name": "Oblomov", "author": "Ivan Goncharov", "pages": 12.5});
    println!("{}", console::outcome("pages as float", &PaperBook::try_from(&bad)));

    Ok(())
}
