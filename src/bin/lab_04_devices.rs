use oop_labs::config::DemoConfig;
use oop_labs::devices::{power_on_all, Device, DeviceBase, Laptop, Smartphone};
use oop_labs::{console, logging, LabError};

fn main() -> Result<(), LabError> {
    logging::init();
    DemoConfig::from_env().apply();

    println!("{}", console::section("Smartphone"));
    let mut phone = Smartphone::new("Samsung", "Galaxy S24", "Android");
    println!("{}", console::value("call", phone.make_call("+1 555 0100")));
    phone.turn_on();
    println!("{}", console::value("call", phone.make_call("+1 555 0100")));
    println!("{}", console::value("video", phone.make_video_call("+1 555 0100")));
    println!("{}", console::value("state", &phone));

    println!("{}", console::section("Laptop"));
    let mut laptop = Laptop::new("Apple", "MacBook Pro", 14.2, "M3 Pro")?;
    laptop.open_lid();
    println!("{}", console::value("task", laptop.perform_task("build")));
    println!("{}", console::value("state", &laptop));

    println!("{}", console::section("All devices"));
    let mut devices: Vec<Box<dyn Device>> = vec![
        Box::new(DeviceBase::new("Generic", "Hub")),
        Box::new(phone),
        Box::new(laptop),
    ];
    power_on_all(&mut devices);
    for device in &devices {
        println!("{}", console::value(device.kind(), device));
        println!("    {}", device.perform_task("update"));
        println!("    {}", device.repr());
    }

    println!(
        "{}",
        console::outcome("laptop with 0\" screen", &Laptop::new("Acme", "Zero", 0.0, "none"))
    );

    Ok(())
}
