//! Lab 4: a base device with power state, specialised into phones and laptops.

use std::fmt;

use serde_json::Value;

use crate::error::{LabError, Result};
use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerState::On => write!(f, "on"),
            PowerState::Off => write!(f, "off"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LidState {
    Open,
    #[default]
    Closed,
}

impl fmt::Display for LidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LidState::Open => write!(f, "open"),
            LidState::Closed => write!(f, "closed"),
        }
    }
}

// =============================================================================
// Milestone 1: Base device
// =============================================================================

/// Brand and model are fixed once built.
///
/// ```compile_fail
/// let mut device = oop_labs::devices::DeviceBase::new("Acme", "X1");
/// device.brand = String::from("Globex");
/// ```
///
/// ```compile_fail
/// let mut device = oop_labs::devices::DeviceBase::new("Acme", "X1");
/// device.model = String::from("X2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceBase {
    brand: String,
    model: String,
    power: PowerState,
}

impl DeviceBase {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            power: PowerState::Off,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn power(&self) -> PowerState {
        self.power
    }

    fn set_power(&mut self, power: PowerState) {
        tracing::debug!(brand = %self.brand, model = %self.model, %power, "power changed");
        self.power = power;
    }
}

impl fmt::Display for DeviceBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, power: {}", self.brand, self.model, self.power)
    }
}

impl TryFrom<&Value> for DeviceBase {
    type Error = LabError;

    fn try_from(value: &Value) -> Result<Self> {
        Ok(DeviceBase::new(
            validate::string_field(value, "brand")?,
            validate::string_field(value, "model")?,
        ))
    }
}

/// Behaviour every device shares. Implementors only expose their base;
/// `perform_task` is the hook subtypes extend.
pub trait Device: fmt::Display + fmt::Debug {
    fn base(&self) -> &DeviceBase;
    fn base_mut(&mut self) -> &mut DeviceBase;
    fn kind(&self) -> &'static str;

    /// Constructor-call text; runtime state such as power is not included.
    fn repr(&self) -> String;

    fn turn_on(&mut self) {
        self.base_mut().set_power(PowerState::On);
    }

    fn turn_off(&mut self) {
        self.base_mut().set_power(PowerState::Off);
    }

    fn is_powered_on(&self) -> bool {
        self.base().power() == PowerState::On
    }

    fn perform_task(&self, task: &str) -> String {
        let base = self.base();
        format!("Task '{task}' completed on {} {}", base.brand(), base.model())
    }
}

impl Device for DeviceBase {
    fn base(&self) -> &DeviceBase {
        self
    }

    fn base_mut(&mut self) -> &mut DeviceBase {
        self
    }

    fn kind(&self) -> &'static str {
        "device"
    }

    fn repr(&self) -> String {
        format!("Device(brand={:?}, model={:?})", self.brand, self.model)
    }
}

// =============================================================================
// Milestone 2: Smartphone
// =============================================================================

/// Brand and model stay read-only even through the mutable base accessor.
///
/// ```compile_fail
/// use oop_labs::devices::Device;
/// let mut phone = oop_labs::devices::Smartphone::new("Apple", "iPhone 15", "iOS");
/// phone.base_mut().brand = String::from("Samsung");
/// ```
///
/// ```compile_fail
/// let mut phone = oop_labs::devices::Smartphone::new("Apple", "iPhone 15", "iOS");
/// phone.base.model = String::from("iPhone 16");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Smartphone {
    base: DeviceBase,
    os: String,
}

impl Smartphone {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, os: impl Into<String>) -> Self {
        Self {
            base: DeviceBase::new(brand, model),
            os: os.into(),
        }
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn make_call(&self, number: &str) -> String {
        if self.is_powered_on() {
            format!("Calling {number} from {} {}", self.base.brand, self.base.model)
        } else {
            String::from("The smartphone is off, cannot make a call")
        }
    }

    pub fn make_video_call(&self, number: &str) -> String {
        if self.is_powered_on() {
            format!("Video calling {number} from {} {}", self.base.brand, self.base.model)
        } else {
            String::from("The smartphone is off, cannot make a video call")
        }
    }
}

impl Device for Smartphone {
    fn base(&self) -> &DeviceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DeviceBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "smartphone"
    }

    fn repr(&self) -> String {
        format!(
            "Smartphone(brand={:?}, model={:?}, os={:?})",
            self.base.brand, self.base.model, self.os
        )
    }

    fn perform_task(&self, task: &str) -> String {
        format!("{}, OS: {}", self.base.perform_task(task), self.os)
    }
}

impl fmt::Display for Smartphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, OS: {}", self.base, self.os)
    }
}

impl TryFrom<&Value> for Smartphone {
    type Error = LabError;

    fn try_from(value: &Value) -> Result<Self> {
        let base = DeviceBase::try_from(value)?;
        let os = validate::string_field(value, "os")?;
        Ok(Self { base, os })
    }
}

// =============================================================================
// Milestone 3: Laptop
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Laptop {
    base: DeviceBase,
    screen_size: f64,
    processor: String,
    lid: LidState,
}

impl Laptop {
    /// `screen_size` is the diagonal in inches. The lid starts closed.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        screen_size: f64,
        processor: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            base: DeviceBase::new(brand, model),
            screen_size: validate::positive("screen_size", screen_size)?,
            processor: processor.into(),
            lid: LidState::Closed,
        })
    }

    pub fn screen_size(&self) -> f64 {
        self.screen_size
    }

    pub fn processor(&self) -> &str {
        &self.processor
    }

    pub fn open_lid(&mut self) {
        self.set_lid(LidState::Open);
    }

    pub fn close_lid(&mut self) {
        self.set_lid(LidState::Closed);
    }

    pub fn is_lid_closed(&self) -> bool {
        self.lid == LidState::Closed
    }

    fn set_lid(&mut self, lid: LidState) {
        tracing::debug!(model = %self.base.model, %lid, "lid changed");
        self.lid = lid;
    }

    fn specs(&self) -> String {
        format!(
            "screen: {}\", processor: {}, lid: {}",
            self.screen_size, self.processor, self.lid
        )
    }
}

impl Device for Laptop {
    fn base(&self) -> &DeviceBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DeviceBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "laptop"
    }

    fn repr(&self) -> String {
        format!(
            "Laptop(brand={:?}, model={:?}, screen_size={:?}, processor={:?})",
            self.base.brand, self.base.model, self.screen_size, self.processor
        )
    }

    fn perform_task(&self, task: &str) -> String {
        format!("{}, {}", self.base.perform_task(task), self.specs())
    }
}

impl fmt::Display for Laptop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.base, self.specs())
    }
}

impl TryFrom<&Value> for Laptop {
    type Error = LabError;

    fn try_from(value: &Value) -> Result<Self> {
        let base = DeviceBase::try_from(value)?;
        let screen_size =
            validate::positive("screen_size", validate::number_field(value, "screen_size")?)?;
        let processor = validate::string_field(value, "processor")?;
        Ok(Self {
            base,
            screen_size,
            processor,
            lid: LidState::Closed,
        })
    }
}

pub fn power_on_all(devices: &mut [Box<dyn Device>]) {
    for device in devices.iter_mut() {
        device.turn_on();
    }
}
