//! In-memory vendor and host doubles shared by the unit tests.

use std::sync::{Arc, Mutex};

use crate::device::{Account, Bulb, Network, StateCallback};
use crate::entity::UpdateScheduler;
use crate::errors::Error;
use crate::history::Command;
use crate::types::Color;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub(crate) struct FakeState {
    pub brightness: u8,
    pub last_brightness: u8,
    pub rgb: bool,
    pub color: Color,
    pub temperature: u8,
    pub commands: Vec<Command>,
    pub fail: Option<&'static str>,
    /// Restricts `fail` to commands with this name.
    pub fail_only: Option<&'static str>,
}

/// Shared view of a [`FakeBulb`] that stays usable after the bulb is moved.
#[derive(Clone)]
pub(crate) struct FakeHandle {
    state: Arc<Mutex<FakeState>>,
    callback: Arc<Mutex<Option<StateCallback>>>,
}

impl FakeHandle {
    pub fn commands(&self) -> Vec<Command> {
        self.state.lock().unwrap().commands.clone()
    }

    pub fn update(&self, f: impl FnOnce(&mut FakeState)) {
        f(&mut self.state.lock().unwrap());
    }

    pub fn fail_with(&self, reason: &'static str) {
        self.state.lock().unwrap().fail = Some(reason);
    }

    /// Fail only the named command, e.g. `"rgb"`.
    pub fn fail_on(&self, command: &'static str, reason: &'static str) {
        let mut state = self.state.lock().unwrap();
        state.fail = Some(reason);
        state.fail_only = Some(command);
    }

    /// Fire the registered callback like the vendor library would.
    pub fn notify(&self) {
        if let Some(callback) = self.callback.lock().unwrap().as_ref() {
            callback();
        }
    }

    pub fn has_callback(&self) -> bool {
        self.callback.lock().unwrap().is_some()
    }
}

pub(crate) struct FakeBulb {
    name: String,
    supports_rgb: bool,
    supports_temperature: bool,
    handle: FakeHandle,
}

impl FakeBulb {
    pub fn new(name: &str, supports_rgb: bool, supports_temperature: bool) -> Self {
        FakeBulb {
            name: name.to_string(),
            supports_rgb,
            supports_temperature,
            handle: FakeHandle {
                state: Arc::new(Mutex::new(FakeState {
                    brightness: 0,
                    last_brightness: 100,
                    rgb: false,
                    color: Color::default(),
                    temperature: 0,
                    commands: Vec::new(),
                    fail: None,
                    fail_only: None,
                })),
                callback: Arc::new(Mutex::new(None)),
            },
        }
    }

    pub fn handle(&self) -> FakeHandle {
        self.handle.clone()
    }

    fn apply(&self, command: Command) -> Result<()> {
        let mut state = self.handle.state.lock().unwrap();
        if let Some(reason) = state.fail {
            if state.fail_only.is_none_or(|only| only == command.name()) {
                return Err(Error::vendor(command.name(), reason));
            }
        }
        state.commands.push(command);
        match command {
            Command::Power { on: true } => state.brightness = state.last_brightness,
            Command::Power { on: false } => {
                if state.brightness != 0 {
                    state.last_brightness = state.brightness;
                }
                state.brightness = 0;
            }
            Command::Brightness { percent } => state.brightness = percent,
            Command::Rgb { red, green, blue } => {
                state.rgb = true;
                state.color = Color::rgb(red, green, blue);
            }
            Command::Temperature { percent } => {
                state.rgb = false;
                state.temperature = percent;
            }
        }
        Ok(())
    }
}

impl Bulb for FakeBulb {
    fn name(&self) -> &str {
        &self.name
    }

    fn brightness(&self) -> u8 {
        self.handle.state.lock().unwrap().brightness
    }

    fn rgb(&self) -> bool {
        self.handle.state.lock().unwrap().rgb
    }

    fn red(&self) -> u8 {
        self.handle.state.lock().unwrap().color.red()
    }

    fn green(&self) -> u8 {
        self.handle.state.lock().unwrap().color.green()
    }

    fn blue(&self) -> u8 {
        self.handle.state.lock().unwrap().color.blue()
    }

    fn temperature(&self) -> u8 {
        self.handle.state.lock().unwrap().temperature
    }

    fn supports_rgb(&self) -> bool {
        self.supports_rgb
    }

    fn supports_temperature(&self) -> bool {
        self.supports_temperature
    }

    async fn set_power(&self, on: bool) -> Result<()> {
        self.apply(Command::Power { on })
    }

    async fn set_brightness(&self, percent: u8) -> Result<()> {
        self.apply(Command::Brightness { percent })
    }

    async fn set_rgb(&self, red: u8, green: u8, blue: u8) -> Result<()> {
        self.apply(Command::Rgb { red, green, blue })
    }

    async fn set_temperature(&self, percent: u8) -> Result<()> {
        self.apply(Command::Temperature { percent })
    }

    fn set_callback(&mut self, callback: StateCallback) {
        *self.handle.callback.lock().unwrap() = Some(callback);
    }
}

pub(crate) struct FakeNetwork {
    pub name: String,
    pub connected: bool,
    pub fail: bool,
}

impl Network for FakeNetwork {
    fn name(&self) -> &str {
        &self.name
    }

    async fn connect(&mut self) -> Result<()> {
        if self.fail {
            return Err(Error::vendor("connect", "mesh unreachable"));
        }
        self.connected = true;
        Ok(())
    }
}

/// Account whose contents are taken from [`FakeAccount::prepare`].
pub(crate) struct FakeAccount {
    pub networks: Vec<FakeNetwork>,
    pub bulbs: Vec<FakeBulb>,
}

/// What the next [`FakeAccount::login`] returns, plus what it was asked.
#[derive(Default)]
pub(crate) struct LoginScript {
    pub credentials: Option<(String, String)>,
    pub account: Option<FakeAccount>,
    pub connected: Vec<String>,
}

thread_local! {
    static SCRIPT: std::cell::RefCell<LoginScript> = std::cell::RefCell::new(LoginScript::default());
}

impl FakeAccount {
    /// Arrange the next login on this thread to return `account`.
    pub fn prepare(account: FakeAccount) {
        SCRIPT.with(|s| *s.borrow_mut() = LoginScript {
            account: Some(account),
            ..LoginScript::default()
        });
    }

    pub fn with_script<T>(f: impl FnOnce(&mut LoginScript) -> T) -> T {
        SCRIPT.with(|s| f(&mut s.borrow_mut()))
    }
}

impl Account for FakeAccount {
    type Network = FakeNetwork;
    type Bulb = FakeBulb;

    async fn login(name: &str, password: &str) -> Result<Self> {
        Self::with_script(|script| {
            script.credentials = Some((name.to_string(), password.to_string()));
            script
                .account
                .take()
                .ok_or_else(|| Error::vendor("login", "bad credentials"))
        })
    }

    fn networks_mut(&mut self) -> &mut [FakeNetwork] {
        &mut self.networks
    }

    fn into_devices(self) -> Vec<FakeBulb> {
        let connected = self
            .networks
            .iter()
            .filter(|n| n.connected)
            .map(|n| n.name.clone())
            .collect();
        Self::with_script(|script| script.connected = connected);
        self.bulbs
    }
}

/// Scheduler that remembers which entities asked for a refresh.
#[derive(Default)]
pub(crate) struct RecordingScheduler {
    calls: Mutex<Vec<String>>,
}

impl RecordingScheduler {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl UpdateScheduler for RecordingScheduler {
    fn schedule_update_state(&self, entity: &str) {
        self.calls.lock().unwrap().push(entity.to_string());
    }
}
