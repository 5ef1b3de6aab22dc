use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::blame::{BlameMap, BlameParser, BlameRecord};
use crate::color::{ColorMapper, PaintContext};
use crate::settings::{DateFormat, Settings};

/// One gutter annotation, ready for the host to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationDirective {
    pub line_number: u32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

/// Width and margin of the annotation column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GutterStyle {
    pub width: String,
    pub margin: String,
}

/// Everything the host needs to paint one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationSet {
    pub gutter: GutterStyle,
    pub directives: Vec<DecorationDirective>,
}

/// Runs blame-then-color passes for the host.
///
/// Starts disabled; a disabled decorator produces no directives, which the
/// host renders as cleared decorations.
#[derive(Debug)]
pub struct Decorator {
    settings: Settings,
    mapper: ColorMapper,
    parser: BlameParser,
    enabled: bool,
}

impl Decorator {
    pub fn new(settings: Settings) -> Self {
        Self::with_parser(settings, BlameParser::default())
    }

    pub fn with_parser(settings: Settings, parser: BlameParser) -> Self {
        let mapper = ColorMapper::from_settings(&settings);
        Self {
            settings,
            mapper,
            parser,
            enabled: false,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip the enabled flag and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings after a configuration change. Rules are
    /// recompiled; nothing from the previous settings is kept.
    pub fn reload(&mut self, settings: Settings) {
        self.mapper = ColorMapper::from_settings(&settings);
        self.settings = settings;
    }

    pub fn gutter(&self) -> GutterStyle {
        GutterStyle {
            width: self.settings.width.clone(),
            margin: self.settings.margin.clone(),
        }
    }

    /// Directives for lines `1..=line_count` that have a blame record, in
    /// line order.
    pub fn decorate(&self, records: &BlameMap, line_count: u32, now: i64) -> Vec<DecorationDirective> {
        if !self.enabled || line_count == 0 {
            return Vec::new();
        }
        let Some(range) = ColorMapper::range(records) else {
            return Vec::new();
        };
        let ctx = PaintContext { range, now };

        records
            .range(1..=line_count)
            .map(|(&line_number, record)| {
                let colors = self.mapper.paint(record, &ctx);
                DecorationDirective {
                    line_number,
                    text: self.label(record),
                    background_color: colors.background().map(|c| c.to_hex()),
                    text_color: Some(colors.text().to_hex()),
                }
            })
            .collect()
    }

    /// Blame `path` and build its decorations. Blame failures yield an
    /// empty directive list.
    pub fn decorate_file(&self, path: &Path, line_count: u32, now: i64) -> DecorationSet {
        let directives = if self.enabled {
            let records = self.parser.parse(path);
            self.decorate(&records, line_count, now)
        } else {
            Vec::new()
        };
        DecorationSet {
            gutter: self.gutter(),
            directives,
        }
    }

    fn label(&self, record: &BlameRecord) -> String {
        let date = match self.settings.date_format {
            DateFormat::Short => record.short_date.as_str(),
            DateFormat::Locale => record.date.as_str(),
            DateFormat::Hidden => "",
        };
        if date.is_empty() {
            record.author.clone()
        } else {
            format!("{} {}", date, record.author)
        }
    }
}

impl Default for Decorator {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
