//! Portfolio page model
//!
//! The profile is laid out once per terminal width into blocks of pre-wrapped
//! lines. Every block has an exact row extent, which is what the reveal
//! tracker observes and what the page widget slices when scrolling.

use super::section::Section;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use twin_domain::{Extent, Profile};

/// Rows between sections
const SECTION_GAP: u16 = 2;

/// Identifies one revealable block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId {
    pub section: Section,
    pub index: u16,
}

/// A run of lines that appears as a unit
#[derive(Debug, Clone)]
pub struct PageBlock {
    pub id: BlockId,
    pub lines: Vec<Line<'static>>,
    /// Blank rows after the block
    pub gap: u16,
}

impl PageBlock {
    pub fn height(&self) -> u32 {
        self.lines.len() as u32 + self.gap as u32
    }
}

/// The whole page at one width
#[derive(Debug, Clone)]
pub struct Page {
    blocks: Vec<PageBlock>,
    tops: Vec<u32>,
    width: u16,
    hero_height: u16,
}

impl Page {
    /// Lay out `profile` for a page `width` columns wide.
    pub fn build(profile: &Profile, width: u16, hero_height: u16) -> Self {
        let text_width = width.saturating_sub(4).max(20) as usize;
        let mut blocks = Vec::new();

        blocks.push(hero_block(profile, hero_height, text_width));
        blocks.extend(about_blocks(profile, text_width));
        blocks.extend(resume_blocks(profile, text_width));
        blocks.extend(project_blocks(profile, text_width));
        blocks.extend(certificate_blocks(profile, text_width));
        blocks.extend(article_blocks(profile, text_width));
        blocks.extend(contact_blocks(profile, text_width));

        let mut tops = Vec::with_capacity(blocks.len());
        let mut top = 0u32;
        for block in &blocks {
            tops.push(top);
            top += block.height();
        }

        Self {
            blocks,
            tops,
            width,
            hero_height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn hero_height(&self) -> u16 {
        self.hero_height
    }

    pub fn blocks(&self) -> &[PageBlock] {
        &self.blocks
    }

    /// Rows covered by block `index` (gap excluded)
    pub fn extent(&self, index: usize) -> Extent {
        let block = &self.blocks[index];
        Extent::new(self.tops[index], block.lines.len() as u32)
    }

    pub fn top(&self, index: usize) -> u32 {
        self.tops[index]
    }

    /// Total page height in rows
    pub fn height(&self) -> u32 {
        match (self.tops.last(), self.blocks.last()) {
            (Some(top), Some(block)) => top + block.height(),
            _ => 0,
        }
    }

    /// First row of a section
    pub fn section_top(&self, section: Section) -> u32 {
        self.blocks
            .iter()
            .position(|b| b.id.section == section)
            .map(|i| self.tops[i])
            .unwrap_or(0)
    }

    /// Section whose start is at or above `offset`
    pub fn section_at(&self, offset: u32) -> Section {
        self.blocks
            .iter()
            .zip(&self.tops)
            .take_while(|(_, top)| **top <= offset)
            .last()
            .map(|(b, _)| b.id.section)
            .unwrap_or(Section::Home)
    }
}

/// Greedy word wrap on character count
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn heading_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn muted_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn wrapped(text: &str, width: usize, indent: &str, style: Style) -> Vec<Line<'static>> {
    let avail = width.saturating_sub(indent.chars().count());
    wrap_text(text, avail)
        .into_iter()
        .map(|l| Line::from(Span::styled(format!("{}{}", indent, l), style)))
        .collect()
}

fn bullet(text: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = wrapped(text, width, "    ", Style::default());
    if let Some(first) = lines.first_mut() {
        let content = first
            .spans
            .first()
            .map(|s| s.content.trim_start().to_string())
            .unwrap_or_default();
        *first = Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Magenta)),
            Span::raw(content),
        ]);
    }
    lines
}

fn heading(section: Section, title: &str) -> PageBlock {
    let rule = "─".repeat(title.chars().count() + 4);
    PageBlock {
        id: BlockId { section, index: 0 },
        lines: vec![
            Line::from(Span::styled(format!("  {}", title), heading_style())),
            Line::from(Span::styled(format!("  {}", rule), muted_style())),
        ],
        gap: 1,
    }
}

fn block(section: Section, index: usize, lines: Vec<Line<'static>>, gap: u16) -> PageBlock {
    PageBlock {
        id: BlockId {
            section,
            index: index as u16,
        },
        lines,
        gap,
    }
}

fn last_gap(blocks: &mut [PageBlock]) {
    if let Some(last) = blocks.last_mut() {
        last.gap = SECTION_GAP;
    }
}

fn hero_block(profile: &Profile, hero_height: u16, width: usize) -> PageBlock {
    let mut content = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.role.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(
        wrap_text(&profile.tagline, width.min(70))
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray)))),
    );
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "press c to chat with my AI twin",
        muted_style(),
    )));

    let height = (hero_height as usize).max(content.len() + 2);
    let pad_top = (height - content.len()) / 2;
    let mut lines = vec![Line::from(""); pad_top];
    lines.extend(
        content
            .into_iter()
            .map(|l| l.alignment(ratatui::layout::Alignment::Center)),
    );
    lines.resize(height, Line::from(""));

    block(Section::Home, 0, lines, SECTION_GAP)
}

fn about_blocks(profile: &Profile, width: usize) -> Vec<PageBlock> {
    let mut blocks = vec![heading(Section::About, "About Me")];
    let mut index = 1;

    let about = if profile.about.is_empty() {
        &profile.summary
    } else {
        &profile.about
    };
    blocks.push(block(
        Section::About,
        index,
        wrapped(about, width, "  ", Style::default()),
        1,
    ));
    index += 1;

    if !profile.stats.is_empty() {
        let mut spans = vec![Span::raw("  ")];
        for (i, stat) in profile.stats.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("   ", muted_style()));
            }
            spans.push(Span::styled(
                stat.value.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(" {}", stat.label)));
        }
        blocks.push(block(Section::About, index, vec![Line::from(spans)], 1));
        index += 1;
    }

    for group in &profile.skill_groups {
        let mut lines = vec![Line::from(Span::styled(
            format!("  {}", group.title),
            title_style(),
        ))];
        lines.extend(wrapped(
            &group.skills.join(" · "),
            width,
            "    ",
            Style::default().fg(Color::Green),
        ));
        blocks.push(block(Section::About, index, lines, 1));
        index += 1;
    }

    last_gap(&mut blocks);
    blocks
}

fn resume_blocks(profile: &Profile, width: usize) -> Vec<PageBlock> {
    let mut blocks = vec![heading(Section::Resume, "Resume")];
    let mut index = 1;

    for exp in &profile.experience {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("  {}", exp.role), title_style()),
                Span::styled(format!(" @ {}", exp.company), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(Span::styled(format!("  {}", exp.period), muted_style())),
        ];
        if exp.highlights.is_empty() {
            lines.extend(wrapped(&exp.summary, width, "    ", Style::default()));
        } else {
            for highlight in &exp.highlights {
                lines.extend(bullet(highlight, width));
            }
        }
        blocks.push(block(Section::Resume, index, lines, 1));
        index += 1;
    }

    for edu in &profile.education {
        let mut lines = vec![
            Line::from(Span::styled(format!("  {}", edu.degree), title_style())),
            Line::from(Span::styled(
                format!("  {}", edu.institution),
                Style::default().fg(Color::Cyan),
            )),
        ];
        let detail = match &edu.grade {
            Some(grade) => format!("  {} · {}", edu.period, grade),
            None => format!("  {}", edu.period),
        };
        lines.push(Line::from(Span::styled(detail, muted_style())));
        blocks.push(block(Section::Resume, index, lines, 1));
        index += 1;
    }

    last_gap(&mut blocks);
    blocks
}

fn project_blocks(profile: &Profile, width: usize) -> Vec<PageBlock> {
    let mut blocks = vec![heading(Section::Projects, "Projects")];

    for (i, project) in profile.projects.iter().enumerate() {
        let mut title = vec![Span::styled(format!("  {}", project.name), title_style())];
        if project.featured {
            title.push(Span::styled(" ★", Style::default().fg(Color::Yellow)));
        }
        let mut lines = vec![Line::from(title)];
        lines.extend(wrapped(&project.description, width, "    ", Style::default()));
        if !project.tags.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    [{}]", project.tags.join("] [")),
                Style::default().fg(Color::Blue),
            )));
        }
        if let Some(link) = &project.link {
            lines.push(Line::from(Span::styled(format!("    {}", link), muted_style())));
        }
        blocks.push(block(Section::Projects, i + 1, lines, 1));
    }

    last_gap(&mut blocks);
    blocks
}

fn certificate_blocks(profile: &Profile, width: usize) -> Vec<PageBlock> {
    let mut blocks = vec![heading(Section::Certificates, "Certificates")];

    for (i, cert) in profile.certificates.iter().enumerate() {
        blocks.push(block(Section::Certificates, i + 1, bullet(&cert.name, width), 0));
    }

    last_gap(&mut blocks);
    blocks
}

fn article_blocks(profile: &Profile, width: usize) -> Vec<PageBlock> {
    let mut blocks = vec![heading(Section::Articles, "Articles")];

    for (i, article) in profile.articles.iter().enumerate() {
        let mut lines = vec![Line::from(Span::styled(
            format!("  {}", article.title),
            title_style(),
        ))];
        lines.extend(wrapped(&article.summary, width, "    ", Style::default()));
        if let Some(link) = &article.link {
            lines.push(Line::from(Span::styled(format!("    {}", link), muted_style())));
        }
        blocks.push(block(Section::Articles, i + 1, lines, 1));
    }

    last_gap(&mut blocks);
    blocks
}

fn contact_blocks(profile: &Profile, _width: usize) -> Vec<PageBlock> {
    let mut blocks = vec![heading(Section::Contact, "Get In Touch")];
    let contact = &profile.contact;

    let mut lines = vec![Line::from(vec![
        Span::styled("  Email     ", muted_style()),
        Span::raw(contact.email.clone()),
    ])];
    let links = [
        ("  GitHub    ", &contact.github),
        ("  LinkedIn  ", &contact.linkedin),
        ("  Resume    ", &contact.resume),
    ];
    for (label, value) in links {
        if let Some(value) = value {
            lines.push(Line::from(vec![
                Span::styled(label, muted_style()),
                Span::raw(value.clone()),
            ]));
        }
    }
    blocks.push(block(Section::Contact, 1, lines, 1));

    blocks.push(block(
        Section::Contact,
        2,
        vec![Line::from(Span::styled(
            format!("  © {} · built with Rust", profile.name),
            muted_style(),
        ))],
        0,
    ));
    blocks
}
