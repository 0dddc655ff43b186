// CLI definitions using clap

use clap::{ArgGroup, Parser};
use hidrelay::{DeviceId, RelayCommand, RelayConfig, Request};

#[derive(Parser, Debug)]
#[command(name = "hidrelay")]
#[command(author, version, about = "Switch USB HID relay boards on or off")]
#[command(group(ArgGroup::new("action").args(["off", "on", "toggle", "list"])))]
pub struct Cli {
    /// Change state of the relay to off
    #[arg(short = '0', long)]
    pub off: bool,

    /// Change state of the relay to on
    #[arg(short = '1', long)]
    pub on: bool,

    /// Toggle on and off state with 2s delay (default)
    #[arg(short, long)]
    pub toggle: bool,

    /// List all available devices
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose logging messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Modify id of the device, not supported (default: 0519:2018)
    #[arg(short, long, value_name = "VID:PID")]
    pub id: Option<DeviceId>,
}

impl Cli {
    /// Requested action; toggle when no action flag is given
    pub fn request(&self) -> Request {
        if self.list {
            Request::List
        } else if self.on {
            Request::Apply(RelayCommand::SetOn)
        } else if self.off {
            Request::Apply(RelayCommand::SetOff)
        } else {
            Request::Apply(RelayCommand::Toggle)
        }
    }

    pub fn config(&self) -> RelayConfig {
        RelayConfig {
            verbose: self.verbose,
            device_id: self.id,
            ..RelayConfig::default()
        }
    }
}
