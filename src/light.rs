//! Adapter exposing one C by GE bulb as a host light entity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use log::{debug, warn};
use serde_json::{Value, json};

use crate::device::Bulb;
use crate::entity::{LightEntity, TurnOnParams, UpdateScheduler};
use crate::errors::Error;
use crate::features::SupportedFeatures;
use crate::history::{Command, CommandHistory};
use crate::runtime::{self, Mutex};
use crate::types::{Brightness, HueSaturation, Kelvin, Mired};

type Result<T> = std::result::Result<T, Error>;

type HostSlot = Arc<OnceLock<Arc<dyn UpdateScheduler>>>;

/// A C by GE bulb presented as a host light.
///
/// All state is read straight from the vendor handle. The vendor callback
/// asks the host for a refresh once the entity has been
/// [attached](GeLight::attach).
pub struct GeLight<B> {
    bulb: B,
    features: SupportedFeatures,
    host: HostSlot,
    notifications: Arc<AtomicU64>,
    history: Mutex<CommandHistory>,
}

impl<B: Bulb> GeLight<B> {
    /// Bulbs need a moment to settle after each command.
    const SETTLE_DELAY: Duration = Duration::from_millis(100);

    pub fn new(mut bulb: B) -> Self {
        let host: HostSlot = Arc::new(OnceLock::new());
        let notifications = Arc::new(AtomicU64::new(0));

        let name = bulb.name().to_string();
        let callback_host = Arc::clone(&host);
        let callback_count = Arc::clone(&notifications);
        bulb.set_callback(Box::new(move || {
            callback_count.fetch_add(1, Ordering::Relaxed);
            match callback_host.get() {
                Some(scheduler) => {
                    debug!("{name}: state changed, scheduling update");
                    scheduler.schedule_update_state(&name);
                }
                None => debug!("{name}: state changed before attach, ignoring"),
            }
        }));

        let features = SupportedFeatures::for_bulb(&bulb);
        debug!("{}: supported features {}", bulb.name(), features);

        GeLight {
            bulb,
            features,
            host,
            notifications,
            history: Mutex::new(CommandHistory::new()),
        }
    }

    /// Link the entity to the host scheduler.
    ///
    /// Returns `false` if the entity was already attached; the first
    /// scheduler stays in place.
    pub fn attach(&self, scheduler: Arc<dyn UpdateScheduler>) -> bool {
        self.host.set(scheduler).is_ok()
    }

    pub fn is_attached(&self) -> bool {
        self.host.get().is_some()
    }

    pub fn bulb(&self) -> &B {
        &self.bulb
    }

    /// Number of vendor state notifications received, attached or not.
    pub fn notification_count(&self) -> u64 {
        self.notifications.load(Ordering::Relaxed)
    }

    pub async fn history(&self) -> CommandHistory {
        self.history.lock().await.clone()
    }

    pub async fn clear_history(&self) {
        self.history.lock().await.clear();
    }

    /// Returns diagnostics including state, features, and command history.
    pub async fn diagnostics(&self) -> Value {
        let mut diag = json!({
            "name": self.bulb.name(),
            "attached": self.is_attached(),
            "notifications": self.notification_count(),
            "raw": {
                "brightness": self.bulb.brightness(),
                "rgb": self.bulb.rgb(),
                "color": self.bulb.color().to_string(),
                "temperature": self.bulb.temperature(),
            },
            "features": self.features.iter().map(|f| f.name()).collect::<Vec<_>>(),
        });

        diag["attributes"] =
            serde_json::to_value(self.state_attributes()).unwrap_or(Value::Null);

        let history = self.history.lock().await;
        diag["history"] = serde_json::to_value(history.summary()).unwrap_or(Value::Null);

        diag
    }

    /// Forward one command to the bulb and wait for it to settle.
    async fn send(&self, command: Command) -> Result<()> {
        self.history.lock().await.record(command);
        debug!("{}: sending {:?}", self.bulb.name(), command);

        let result = match command {
            Command::Power { on } => self.bulb.set_power(on).await,
            Command::Brightness { percent } => self.bulb.set_brightness(percent).await,
            Command::Rgb { red, green, blue } => self.bulb.set_rgb(red, green, blue).await,
            Command::Temperature { percent } => self.bulb.set_temperature(percent).await,
        };

        if let Err(e) = &result {
            warn!("{}: {} command failed: {}", self.bulb.name(), command.name(), e);
            self.history.lock().await.record_error(&e.to_string());
        }
        result?;

        runtime::sleep(Self::SETTLE_DELAY).await;
        Ok(())
    }
}

impl<B: Bulb> LightEntity for GeLight<B> {
    fn name(&self) -> &str {
        self.bulb.name()
    }

    fn is_on(&self) -> bool {
        self.bulb.brightness() != 0
    }

    fn brightness(&self) -> Option<Brightness> {
        Some(Brightness::from_percent(self.bulb.brightness()))
    }

    fn hs_color(&self) -> Option<HueSaturation> {
        self.bulb
            .rgb()
            .then(|| HueSaturation::from_color(&self.bulb.color()))
    }

    fn color_temp(&self) -> Option<Mired> {
        (!self.bulb.rgb())
            .then(|| Kelvin::from_temperature_percent(self.bulb.temperature()).to_mired())
    }

    fn min_mireds(&self) -> Mired {
        Kelvin::COOLEST.to_mired()
    }

    fn max_mireds(&self) -> Mired {
        Kelvin::WARMEST.to_mired()
    }

    fn supported_features(&self) -> SupportedFeatures {
        self.features
    }

    fn should_poll(&self) -> bool {
        false
    }

    async fn turn_on(&self, params: TurnOnParams) -> Result<()> {
        if !self.is_on() {
            self.send(Command::Power { on: true }).await?;
        }

        if let Some(hs) = params.hs_color {
            let color = hs.to_color();
            self.send(Command::Rgb {
                red: color.red(),
                green: color.green(),
                blue: color.blue(),
            })
            .await?;
        } else if let Some(mired) = params.color_temp {
            let percent = mired.to_kelvin().to_temperature_percent();
            self.send(Command::Temperature { percent }).await?;
        }

        if let Some(brightness) = params.brightness {
            self.send(Command::Brightness {
                percent: brightness.to_percent(),
            })
            .await?;
        }

        Ok(())
    }

    async fn turn_off(&self) -> Result<()> {
        self.send(Command::Power { on: false }).await
    }
}
