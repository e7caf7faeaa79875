use std::io::{self, Write};

use memoria_core::SessionEvent;

/// Distinct audio cues the game emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Flip,
    Match,
    Miss,
    Victory,
    Defeat,
}

impl SoundCue {
    /// The cue for a session event, if that event is audible
    pub fn for_event(event: SessionEvent) -> Option<SoundCue> {
        match event {
            SessionEvent::CardFlipped => Some(SoundCue::Flip),
            SessionEvent::PairMatched => Some(SoundCue::Match),
            SessionEvent::PairMissed => Some(SoundCue::Miss),
            SessionEvent::RoundWon => Some(SoundCue::Victory),
            SessionEvent::TimeExpired => Some(SoundCue::Defeat),
            SessionEvent::RoundStarted | SessionEvent::RoundAbandoned => None,
        }
    }
}

/// Turns session events into audible feedback, honoring the in-game
/// sound and music toggles. The terminal bell is the only instrument a
/// plain terminal ships with; richer playback belongs to a frontend
/// with a speaker, so what lives here is the cue mapping plus the
/// play/stop bookkeeping for the background loop.
pub struct SoundBoard {
    sound_enabled: bool,
    music_enabled: bool,
    music_playing: bool,
}

impl SoundBoard {
    pub fn new(sound_enabled: bool, music_enabled: bool) -> Self {
        Self {
            sound_enabled,
            music_enabled,
            music_playing: false,
        }
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    /// Turning music off mid-round silences the loop; turning it on does
    /// nothing until `start_music` is called again.
    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.music_enabled = enabled;
        if !enabled {
            self.music_playing = false;
        }
    }

    /// Start the background loop, unless the toggle says no or it is
    /// already going
    pub fn start_music(&mut self) {
        if self.music_enabled && !self.music_playing {
            self.music_playing = true;
        }
    }

    pub fn stop_music(&mut self) {
        self.music_playing = false;
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::RoundStarted => self.start_music(),
            SessionEvent::RoundWon
            | SessionEvent::TimeExpired
            | SessionEvent::RoundAbandoned => self.stop_music(),
            _ => {}
        }

        let Some(cue) = SoundCue::for_event(event) else {
            return;
        };
        if self.sound_enabled {
            self.ring(cue);
        }
    }

    fn ring(&mut self, cue: SoundCue) {
        // End-of-round cues get a double ring for emphasis
        let repeats = match cue {
            SoundCue::Victory | SoundCue::Defeat => 2,
            SoundCue::Flip | SoundCue::Match | SoundCue::Miss => 1,
        };
        let mut out = io::stdout();
        for _ in 0..repeats {
            let _ = out.write_all(b"\x07");
        }
        let _ = out.flush();
    }
}
