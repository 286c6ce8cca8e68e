//! Platform setup: log in, connect, and hand every bulb to the host.

use futures::future::try_join_all;
use log::{debug, info};

use crate::config::PlatformConfig;
use crate::device::{Account, Network};
use crate::errors::Error;
use crate::light::GeLight;

type Result<T> = std::result::Result<T, Error>;

/// Set up the C by GE platform.
///
/// Logs in with the configured credentials, connects every network of
/// the account, wraps each bulb in a [`GeLight`] and passes them all to
/// `add_entities` in a single call. Returns the number of lights added.
///
/// Nothing is added if any step fails.
pub async fn setup_platform<A, F>(config: &PlatformConfig, add_entities: F) -> Result<usize>
where
    A: Account,
    F: FnOnce(Vec<GeLight<A::Bulb>>),
{
    config.validate()?;

    info!("logging in to C by GE as {}", config.name);
    let mut account = A::login(&config.name, &config.password).await?;

    let connects = account.networks_mut().iter_mut().map(|network| async move {
        debug!("connecting to network {}", network.name());
        network.connect().await
    });
    try_join_all(connects).await?;

    let lights: Vec<GeLight<A::Bulb>> = account
        .into_devices()
        .into_iter()
        .map(GeLight::new)
        .collect();

    let count = lights.len();
    info!("adding {count} C by GE light(s)");
    add_entities(lights);
    Ok(count)
}
