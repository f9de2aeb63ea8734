//! Intent/Command-Datenfluss: Intents kommen aus der UI, Commands
//! beschreiben die daraus abgeleiteten Zustandsänderungen.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
