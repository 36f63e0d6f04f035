//src/controllers/osc.rs
//
// Remote control over OSC. Messages are parsed into LoopCommands and queued
// until the app takes them on its next update.
//
//   /circle/admit x y      admit a circle at screen position (x, y)
//   /circle/autoplay on    1 enables autoplay, 0 disables it
//   /circle/pause          freeze the animation
//   /circle/resume         continue the animation

use nannou_osc as osc;
use std::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum LoopCommand {
    Admit { x: f32, y: f32 },
    SetAutoplay(bool),
    Pause,
    Resume,
}

pub struct OscController {
    command_queue: Vec<LoopCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;
        log::info!("listening for OSC on port {}", port);

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match parse_message(&message) {
                    Some(command) => self.command_queue.push(command),
                    None => log::warn!(
                        "ignoring OSC message {} {:?} from {}",
                        message.addr,
                        message.args,
                        addr
                    ),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<LoopCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub fn parse_message(message: &osc::Message) -> Option<LoopCommand> {
    match (message.addr.as_str(), &message.args[..]) {
        ("/circle/admit", [x, y]) => Some(LoopCommand::Admit {
            x: as_float(x)?,
            y: as_float(y)?,
        }),
        ("/circle/autoplay", [on]) => match on {
            osc::Type::Int(value) => Some(LoopCommand::SetAutoplay(*value != 0)),
            osc::Type::Bool(value) => Some(LoopCommand::SetAutoplay(*value)),
            _ => None,
        },
        ("/circle/pause", []) => Some(LoopCommand::Pause),
        ("/circle/resume", []) => Some(LoopCommand::Resume),
        _ => None,
    }
}

fn as_float(arg: &osc::Type) -> Option<f32> {
    match arg {
        osc::Type::Float(value) => Some(*value),
        osc::Type::Int(value) => Some(*value as f32),
        _ => None,
    }
}
