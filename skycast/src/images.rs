//! Condition string → background art
//!
//! A finite table plus an explicit fallback, so [`image_for`] is total and pure.
//! Lookup is case-insensitive and ignores surrounding whitespace. Condition
//! names from both the OpenWeatherMap `main` groups ("Clouds", "Mist") and the
//! classic descriptive set ("Light Cloud", "Showers") are recognised.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

/// A background image: ASCII art plus the tint used for the art and the frame
#[derive(Debug, PartialEq, Eq)]
pub struct WeatherImage {
    pub kind: ImageKind,
    pub art: &'static str,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Clear,
    LightCloud,
    HeavyCloud,
    LightRain,
    HeavyRain,
    Thunder,
    Snow,
    Sleet,
    Hail,
    Fog,
    Fallback,
}

impl WeatherImage {
    pub fn height(&self) -> u16 {
        self.art.lines().count() as u16
    }

    /// The art as styled text, one line per row
    pub fn to_text(&self) -> Text<'static> {
        let style = Style::default().fg(self.color);
        self.art
            .lines()
            .map(|line| Line::from(Span::styled(line, style)))
            .collect::<Vec<_>>()
            .into()
    }
}

const CONDITIONS: &[(&str, ImageKind)] = &[
    ("clear", ImageKind::Clear),
    ("sunny", ImageKind::Clear),
    ("clouds", ImageKind::LightCloud),
    ("light cloud", ImageKind::LightCloud),
    ("partly cloudy", ImageKind::LightCloud),
    ("heavy cloud", ImageKind::HeavyCloud),
    ("overcast", ImageKind::HeavyCloud),
    ("rain", ImageKind::HeavyRain),
    ("heavy rain", ImageKind::HeavyRain),
    ("drizzle", ImageKind::LightRain),
    ("light rain", ImageKind::LightRain),
    ("showers", ImageKind::LightRain),
    ("thunderstorm", ImageKind::Thunder),
    ("thunder", ImageKind::Thunder),
    ("snow", ImageKind::Snow),
    ("sleet", ImageKind::Sleet),
    ("hail", ImageKind::Hail),
    ("mist", ImageKind::Fog),
    ("fog", ImageKind::Fog),
    ("haze", ImageKind::Fog),
    ("smoke", ImageKind::Fog),
    ("dust", ImageKind::Fog),
    ("sand", ImageKind::Fog),
    ("ash", ImageKind::Fog),
];

static CLEAR: WeatherImage = WeatherImage {
    kind: ImageKind::Clear,
    art: r"    \   |   /
      .---.
 --- (     ) ---
      `---'
    /   |   \",
    color: Color::Yellow,
};

static LIGHT_CLOUD: WeatherImage = WeatherImage {
    kind: ImageKind::LightCloud,
    art: r"   \  /
 _ /''.-.
   \_(   ).
   /(___(__)
",
    color: Color::Rgb(200, 200, 100),
};

static HEAVY_CLOUD: WeatherImage = WeatherImage {
    kind: ImageKind::HeavyCloud,
    art: r"      .--.
   .-(    ).
  (___.__)__)
    .--.
 .-(    ).",
    color: Color::Rgb(160, 160, 175),
};

static LIGHT_RAIN: WeatherImage = WeatherImage {
    kind: ImageKind::LightRain,
    art: r"     .-.
    (   ).
   (___(__)
    ' ' ' '
   ' ' ' '",
    color: Color::Rgb(130, 170, 200),
};

static HEAVY_RAIN: WeatherImage = WeatherImage {
    kind: ImageKind::HeavyRain,
    art: r"     .-.
    (   ).
   (___(__)
  ,',',',',
  ,',',',',",
    color: Color::Rgb(80, 140, 200),
};

static THUNDER: WeatherImage = WeatherImage {
    kind: ImageKind::Thunder,
    art: r"     .-.
    (   ).
   (___(__)
    /_ /_
     /  /",
    color: Color::Rgb(180, 180, 50),
};

static SNOW: WeatherImage = WeatherImage {
    kind: ImageKind::Snow,
    art: r"     .-.
    (   ).
   (___(__)
    *  *  *
   *  *  *",
    color: Color::Rgb(200, 220, 255),
};

static SLEET: WeatherImage = WeatherImage {
    kind: ImageKind::Sleet,
    art: r"     .-.
    (   ).
   (___(__)
    ' * ' *
   * ' * '",
    color: Color::Rgb(170, 200, 230),
};

static HAIL: WeatherImage = WeatherImage {
    kind: ImageKind::Hail,
    art: r"     .-.
    (   ).
   (___(__)
    o  o  o
   o  o  o",
    color: Color::Rgb(190, 210, 230),
};

static FOG: WeatherImage = WeatherImage {
    kind: ImageKind::Fog,
    art: r" _ - _ - _ -
  _ - _ - _
 _ - _ - _ -
  _ - _ - _",
    color: Color::Rgb(150, 150, 160),
};

static FALLBACK: WeatherImage = WeatherImage {
    kind: ImageKind::Fallback,
    art: r"    .---.
   (  ?  )
    `---'",
    color: Color::Rgb(150, 150, 165),
};

fn image_of(kind: ImageKind) -> &'static WeatherImage {
    match kind {
        ImageKind::Clear => &CLEAR,
        ImageKind::LightCloud => &LIGHT_CLOUD,
        ImageKind::HeavyCloud => &HEAVY_CLOUD,
        ImageKind::LightRain => &LIGHT_RAIN,
        ImageKind::HeavyRain => &HEAVY_RAIN,
        ImageKind::Thunder => &THUNDER,
        ImageKind::Snow => &SNOW,
        ImageKind::Sleet => &SLEET,
        ImageKind::Hail => &HAIL,
        ImageKind::Fog => &FOG,
        ImageKind::Fallback => &FALLBACK,
    }
}

/// Background image for a condition string; unknown conditions get the fallback.
pub fn image_for(condition: &str) -> &'static WeatherImage {
    let condition = condition.trim();
    let kind = CONDITIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(condition))
        .map(|&(_, kind)| kind)
        .unwrap_or(ImageKind::Fallback);
    image_of(kind)
}

/// Memoizes [`image_for`] on the condition string, so unrelated state changes
/// reuse the previous choice.
#[derive(Debug, Default)]
pub struct BackgroundCache {
    last: Option<(String, &'static WeatherImage)>,
    misses: usize,
}

impl BackgroundCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, condition: &str) -> &'static WeatherImage {
        match &self.last {
            Some((cached, image)) if cached == condition => *image,
            _ => {
                let image = image_for(condition);
                self.misses += 1;
                self.last = Some((condition.to_string(), image));
                image
            }
        }
    }

    /// How many times the table has actually been consulted
    pub fn misses(&self) -> usize {
        self.misses
    }
}
