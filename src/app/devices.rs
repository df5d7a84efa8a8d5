//! Devices implement only the capability traits they actually have.

use crate::domain::ports::{Camera, Connectable, Device, Displayable, MusicPlayback};

#[derive(Debug, Clone, Copy, Default)]
pub struct Smartphone;

impl Device for Smartphone {
    fn power_on(&self) -> String {
        "SmartPhone Powered On....".to_string()
    }

    fn power_off(&self) -> String {
        "SmartPhone Powered OFF....".to_string()
    }
}

impl Connectable for Smartphone {
    fn connect_to_internet(&self) -> String {
        "Connected to the internet.".to_string()
    }
}

impl Displayable for Smartphone {
    fn display(&self, content: &str) -> String {
        format!("Displaying: {}", content)
    }
}

impl Camera for Smartphone {
    fn take_photo(&self) -> String {
        "Photo taken.".to_string()
    }

    fn record_video(&self) -> String {
        "Video Recorded.".to_string()
    }
}

impl MusicPlayback for Smartphone {
    fn play_music(&self) -> String {
        "Music playing. .-.".to_string()
    }

    fn pause_music(&self) -> String {
        "Music Paused !".to_string()
    }

    fn stop_music(&self) -> String {
        "Music Stopped,".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DigitalCamera;

impl Device for DigitalCamera {
    fn power_on(&self) -> String {
        "Digital camera powered on.".to_string()
    }

    fn power_off(&self) -> String {
        "Digital camera powered off.".to_string()
    }
}

impl Camera for DigitalCamera {
    fn take_photo(&self) -> String {
        "Photo taken.".to_string()
    }

    fn record_video(&self) -> String {
        "Digital cameras can't record videos.".to_string()
    }
}

impl Displayable for DigitalCamera {
    fn display(&self, content: &str) -> String {
        format!("Displaying captured image: {}", content)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MusicPlayer;

impl Device for MusicPlayer {
    fn power_on(&self) -> String {
        "Music player powered on.".to_string()
    }

    fn power_off(&self) -> String {
        "Music player powered off.".to_string()
    }
}

impl MusicPlayback for MusicPlayer {
    fn play_music(&self) -> String {
        "Music playing.".to_string()
    }

    fn pause_music(&self) -> String {
        "Music paused.".to_string()
    }

    fn stop_music(&self) -> String {
        "Music stopped.".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmartTv;

impl Device for SmartTv {
    fn power_on(&self) -> String {
        "Smart TV powered on.".to_string()
    }

    fn power_off(&self) -> String {
        "Smart TV powered off.".to_string()
    }
}

impl Connectable for SmartTv {
    fn connect_to_internet(&self) -> String {
        "Smart TV connected to the internet.".to_string()
    }
}

impl Displayable for SmartTv {
    fn display(&self, content: &str) -> String {
        format!("Smart TV displaying: {}", content)
    }
}

impl MusicPlayback for SmartTv {
    fn play_music(&self) -> String {
        "Smart TV playing background music.".to_string()
    }

    fn pause_music(&self) -> String {
        "Smart TV music paused.".to_string()
    }

    fn stop_music(&self) -> String {
        "Smart TV music stopped.".to_string()
    }
}
