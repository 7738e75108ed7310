use oop_labs::config::DemoConfig;
use oop_labs::records::{AbstractConcept, Severity, SocialMediaPlatform, Table};
use oop_labs::{console, logging, LabError};
use serde_json::json;

fn main() -> Result<(), LabError> {
    logging::init();
    DemoConfig::from_env().apply();

    println!("{}", console::section("Table"));
    let mut table = Table::new("wood", 10.5)?;
    table.move_to("room");
    println!("{}", console::value("inspect", table.inspect()));
    println!("{}", console::value("damaged", table.damage(Severity::Label("hard".into()))));
    println!("{}", console::value("now", &table));

    println!("{}", console::section("Social media platform"));
    let mut platform = SocialMediaPlatform::new("Facebook", 1_000_000_000)?;
    platform.post("Hello, world!");
    println!("{}", console::value("users", platform.get_users_count()));
    println!("{}", console::value("posts", platform.posts().len()));

    println!("{}", console::section("Abstract concept"));
    let mut concept = AbstractConcept::new("Justice", "The moral principle of fairness.");
    concept.explore();
    println!("{}", console::value("define", concept.define()));
    println!("{}", console::value("discuss", concept.discuss("Legal System")));

    println!("{}", console::section("Validation"));
    let inputs = [
        json!({"material": "oak", "weight": -2}),
        json!({"material": 7, "weight": 3}),
    ];
    for input in &inputs {
        println!("{}", console::outcome(&input.to_string(), &Table::try_from(input)));
    }
    let platform_input = json!({"name": "Forum", "users": -10});
    println!(
        "{}",
        console::outcome(
            &platform_input.to_string(),
            &SocialMediaPlatform::try_from(&platform_input)
        )
    );

    Ok(())
}
