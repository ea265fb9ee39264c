//! Static event catalogue shown by the slideshow.
//!
//! The records are built once at compile time and never mutated.

use serde::Serialize;

/// Workload rating of an event.
///
/// The numeric value and label are two views of the same variant, so they
/// can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Difficulty {
    /// Rating 1.
    Easy,
    /// Rating 2.
    Medium,
    /// Rating 3.
    Hard,
}

impl Difficulty {
    /// Numeric rating, 1 through 3.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// One event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Display number, also the image lookup key.
    pub id: u32,
    /// Headline.
    pub title: &'static str,
    /// One-paragraph summary.
    pub description: &'static str,
    /// Bullet points.
    pub details: &'static [&'static str],
    /// Workload rating.
    pub difficulty: Difficulty,
    /// Free-text running time, when known.
    pub duration: Option<&'static str>,
}

impl Event {
    /// Label matching `difficulty`.
    #[must_use]
    pub const fn difficulty_label(&self) -> &'static str {
        self.difficulty.label()
    }
}

const fn event(
    id: u32,
    title: &'static str,
    description: &'static str,
    details: &'static [&'static str],
    difficulty: Difficulty,
) -> Event {
    Event { id, title, description, details, difficulty, duration: None }
}

const fn timed(mut e: Event, duration: &'static str) -> Event {
    e.duration = Some(duration);
    e
}

use Difficulty::{Easy, Hard, Medium};

/// The full catalogue, in presentation order.
pub static EVENTS: [Event; 25] = [
    timed(
        event(
            1,
            "Shoot Your First Short",
            "Students form small groups, pick a quick prompt, and shoot a 30-second short film using the DJI Osmo Pocket or Lumix cameras.",
            &["Form small groups", "Pick a quick prompt", "Shoot 30-second short film", "Watch together at the end"],
            Medium,
        ),
        "60–90 mins",
    ),
    event(
        2,
        "Campus Music Video Challenge",
        "Pick one song (copyright-free). Students produce a 1-minute music video around campus.",
        &["Copyright-free song selection", "1-minute music video production", "Campus locations", "Team edits final montage"],
        Hard,
    ),
    event(
        3,
        "Create-Your-Own Karaoke Video Night",
        "Students pick songs → you record them in front of your backdrop → your team builds karaoke-style lyrics overlays.",
        &["Song selection", "Recording with backdrop", "Karaoke-style lyrics overlays", "Karaoke showcase"],
        Medium,
    ),
    event(
        4,
        "One-Shot Film Workshop",
        "Teach students how to make a film using only one continuous shot.",
        &["Continuous shot technique", "Blocking and movement", "Camera confidence", "Simple editing"],
        Medium,
    ),
    event(
        5,
        "TikTok/Short-Form Content Masterclass",
        "How to shoot trends, transitions, voiceovers, and storytelling with just a phone + ring light.",
        &["Trend shooting", "Transitions and voiceovers", "Storytelling techniques", "Live clip creation"],
        Easy,
    ),
    event(
        6,
        "Creative Media Gear Petting Zoo",
        "Hands-on open house. Students try drones, cameras, gimbals, lights, audio recorders, etc.",
        &["Hands-on equipment trial", "Drones, cameras, gimbals", "Lights and audio recorders", "Staff demonstrations"],
        Easy,
    ),
    event(
        7,
        "Live Audio Recording & Podcasting Session",
        "Teach students mic types, room treatment tricks, and recording basics. Then have everyone record a 1-minute \"mini-podcast.\"",
        &["Mic types and selection", "Room treatment tricks", "Recording basics", "1-minute mini-podcast creation"],
        Easy,
    ),
    event(
        8,
        "Color Grading Mini-Workshop",
        "Use DaVinci Resolve or Premiere. Show beginners how color transforms footage.",
        &["DaVinci Resolve / Premiere", "Color transformation techniques", "Hands-on color correction", "Sample clip practice"],
        Easy,
    ),
    event(
        9,
        "Shoot With What You Have",
        "Teach how to make cinematic shots with only a phone.",
        &["Cinematic phone techniques", "Framing and angles", "Slow motion", "Natural lighting tips"],
        Easy,
    ),
    event(
        10,
        "Student Playlist + Dance Party",
        "Students submit songs → Creative Media team turns it into a visualizer playlist → dance/social night.",
        &["Song submissions", "Visualizer playlist creation", "Dance and social night", "Low creative prep"],
        Easy,
    ),
    event(
        11,
        "Movie Night + Behind-The-Scenes Breakdown",
        "Watch a movie, then discuss cinematography, color, lighting, editing, and sound design.",
        &["Film screening", "Cinematography analysis", "Color and lighting discussion", "Editing and sound design"],
        Easy,
    ),
    timed(
        event(
            12,
            "Photography Walk on Campus",
            "Use your cameras or theirs. Walk around campus and teach composition, shutter/aperture, portraits, and motion shots.",
            &["Campus photography walk", "Composition techniques", "Shutter and aperture", "Portraits and motion shots"],
            Hard,
        ),
        "Golden Hour",
    ),
    event(
        13,
        "Shoot a Product Ad Challenge",
        "Provide random objects (cereal box, sneakers, water bottle). Students shoot a 15-sec \"commercial.\"",
        &["Random object selection", "15-second commercial creation", "Indoor shooting", "Creative and fun"],
        Easy,
    ),
    event(
        14,
        "Stop-Motion Animation Event",
        "Using phone cameras. Small props + paper + clay. Students create short stop-motion scenes.",
        &["Phone camera stop-motion", "Props, paper, and clay", "Short scene creation", "Table setups and lighting"],
        Medium,
    ),
    event(
        15,
        "Green Screen Experiments Night",
        "Students shoot clips in your green screen room and pick backgrounds: news anchor, superhero fly-through, movie scenes, exotic locations.",
        &["Green screen room", "Background selection", "News anchor, superhero, movie scenes", "Exotic locations"],
        Easy,
    ),
    event(
        16,
        "Sound Effects & Foley Studio Night",
        "Let students recreate sound effects using random objects. Record footsteps, whooshes, impacts, etc.",
        &["Sound effect recreation", "Random object usage", "Footsteps, whooshes, impacts", "Funny soundscape creation"],
        Easy,
    ),
    event(
        17,
        "Creative Headshot Session",
        "Students come dressed how they want. Use proper lighting + backdrop to give them professional photos for LinkedIn or portfolios.",
        &["Professional headshots", "Proper lighting and backdrop", "LinkedIn and portfolio ready", "Individual sessions"],
        Medium,
    ),
    event(
        18,
        "Digital Art Jam Session",
        "Partner with art students. Bring tablets/iPads. Create illustrations or graphic posters to a theme (e.g., \"Baylor Stories\").",
        &["Partner with art students", "Tablets and iPads", "Illustrations and graphic posters", "Theme-based creation"],
        Easy,
    ),
    event(
        19,
        "Adobe Crash Course Night",
        "Teach 2–3 extremely practical skills: remove background, fix audio, add motion text.",
        &["Photoshop / Premiere / After Effects", "Remove background", "Fix audio", "Add motion text"],
        Easy,
    ),
    event(
        20,
        "24-Hour Reel Challenge Launch Night",
        "Kickoff event where students draw a random theme. They have 24 hours to make a 30-second reel.",
        &["Random theme selection", "24-hour challenge", "30-second reel creation", "Campus social media feature"],
        Hard,
    ),
    event(
        21,
        "Create Your Own Movie Poster",
        "Give students a template, photo studio space, and props. They pose → you take pictures → they design posters.",
        &["Template provided", "Photo studio space", "Props and posing", "Poster design"],
        Medium,
    ),
    event(
        22,
        "Insta360 Creative Shots Workshop",
        "A hands-on event focused entirely on one device: the Insta360 camera.",
        &[
            "How 360° filming works",
            "How to frame shots after filming using the Insta360 app",
            "Create fun effects: Tiny Planet, Horizon Flip, Follow Cam (AI tracking)",
            "How the Invisible Selfie Stick works",
        ],
        Medium,
    ),
    event(
        23,
        "Interviewing Someone on Camera",
        "Teach framing, 3-point lighting, lav mic placement. Let students interview each other on camera.",
        &["Framing techniques", "3-point lighting", "Lav mic placement", "Student interviews"],
        Easy,
    ),
    event(
        24,
        "Creative Media Game Night",
        "Interactive challenges: Guess the Film from the Frame, Sound Guessing Game, Camera Angles Trivia, Editing Speed Race.",
        &["Guess the Film from the Frame", "Sound Guessing Game", "Camera Angles Trivia", "Editing Speed Race"],
        Easy,
    ),
    event(
        25,
        "End-of-Semester Film Festival",
        "Students submit any project made during events. Awards + popcorn + social hangout.",
        &["Project submissions", "Awards ceremony", "Popcorn and social hangout", "Screening setup"],
        Hard,
    ),
];

/// The catalogue as a slice.
pub fn all() -> &'static [Event] {
    &EVENTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_has_unique_positive_ids() {
        let ids: HashSet<u32> = EVENTS.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 25);
        assert!(EVENTS.iter().all(|e| e.id > 0));
    }

    #[test]
    fn test_difficulty_label_matches_value() {
        for e in all() {
            let expected = match e.difficulty.value() {
                1 => "Easy",
                2 => "Medium",
                _ => "Hard",
            };
            assert_eq!(e.difficulty_label(), expected);
        }
    }

    #[test]
    fn test_durations_present_only_where_declared() {
        let timed: Vec<u32> = EVENTS.iter().filter(|e| e.duration.is_some()).map(|e| e.id).collect();
        assert_eq!(timed, vec![1, 12]);
    }
}
