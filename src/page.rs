//! Page model.
//!
//! Stands in for the document: the page is a vertical stack of blocks grouped
//! into sections. Some blocks are hook elements (things the reveal engine and
//! the skill animator watch). Layout is computed in terminal rows and exposed
//! in page pixels so scroll offsets read the same as on the web page.

use std::collections::HashMap;

use crate::constants::CELL_HEIGHT_PX;

/// Block heights in rows.
pub mod rows {
    pub const SECTION_PADDING: u16 = 1;
    pub const HERO: u16 = 9;
    pub const PROFILE: u16 = 7;
    pub const ABOUT: u16 = 6;
    pub const SECTION_TITLE: u16 = 3;
    pub const SKILL_CATEGORY_HEADER: u16 = 2;
    pub const SKILL: u16 = 2;
    pub const FILTER_BAR: u16 = 2;
    pub const PROJECT_CARD: u16 = 8;
    pub const EMPTY_GRID: u16 = 5;
    pub const CONTACT_INFO: u16 = 6;
    pub const CONTACT_FORM: u16 = 13;
    pub const FOOTER: u16 = 2;
}

/// Opaque handle to a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

/// Hands out element ids; ids are never reused, so re-rendered elements start
/// with no history.
#[derive(Debug, Default)]
pub struct ElementIds {
    next: u32,
}

impl ElementIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }

    pub fn allocate_many(&mut self, count: usize) -> Vec<ElementId> {
        (0..count).map(|_| self.allocate()).collect()
    }
}

/// Selector hooks elements can be queried by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    HeroContent,
    ProfileContainer,
    SectionTitle,
    SkillCategory,
    SkillProgress,
    FeaturedCard,
    ContactInfo,
    ContactForm,
}

/// Page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Anchor id (`#skills` links to `skills`).
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Nav link label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Resolves an `#anchor` link.
    pub fn from_link(link: &str) -> Option<Self> {
        let anchor = link.strip_prefix('#')?;
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Vertical extent in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub top: u32,
    pub height: u32,
}

impl Span {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// One past the last pixel.
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    pub fn contains(&self, y: u32) -> bool {
        y >= self.top && y < self.bottom()
    }

    /// Number of pixels shared with `other`.
    pub fn overlap(&self, other: &Span) -> u32 {
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        bottom.saturating_sub(top)
    }
}

/// Section position on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub span: Span,
}

/// What a block of rows shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Spacer,
    Hero,
    Profile,
    About,
    SectionTitle(SectionId),
    SkillCategoryHeader { category: usize },
    Skill { category: usize, skill: usize },
    FilterBar,
    ProjectCard { project_id: u32 },
    EmptyGrid,
    ContactInfo,
    ContactForm,
    Footer,
}

/// A block at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub block: Block,
    /// Element the block belongs to, if it is one on its own.
    pub element: Option<ElementId>,
    /// Enclosing group element (skill category around its bars).
    pub group: Option<ElementId>,
    pub row: u32,
    pub rows: u16,
}

/// Ids of the elements that exist for the page's whole lifetime.
#[derive(Debug, Clone)]
pub struct StaticElements {
    pub hero: ElementId,
    pub profile: ElementId,
    pub titles: Vec<(SectionId, ElementId)>,
    pub skill_categories: Vec<ElementId>,
    /// Bar ids per category.
    pub skill_bars: Vec<Vec<ElementId>>,
    pub contact_info: ElementId,
    pub contact_form: ElementId,
}

impl StaticElements {
    /// Allocates ids for a page with the given number of skills per category.
    pub fn allocate(ids: &mut ElementIds, skills_per_category: &[usize]) -> Self {
        let hero = ids.allocate();
        let profile = ids.allocate();
        let titles = [SectionId::About, SectionId::Skills, SectionId::Projects, SectionId::Contact]
            .into_iter()
            .map(|section| (section, ids.allocate()))
            .collect();
        let skill_categories = ids.allocate_many(skills_per_category.len());
        let skill_bars = skills_per_category
            .iter()
            .map(|count| ids.allocate_many(*count))
            .collect();

        Self {
            hero,
            profile,
            titles,
            skill_categories,
            skill_bars,
            contact_info: ids.allocate(),
            contact_form: ids.allocate(),
        }
    }

    fn title(&self, section: SectionId) -> Option<ElementId> {
        self.titles
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, id)| *id)
    }
}

/// Computed page layout.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    blocks: Vec<Placed>,
    sections: Vec<SectionBounds>,
    elements: HashMap<ElementId, (Hook, Span)>,
    total_rows: u32,
}

impl PageLayout {
    /// Lays out the page. `cards` are the currently rendered project cards.
    pub fn compose(statics: &StaticElements, cards: &[(ElementId, u32)]) -> Self {
        let mut b = PageBuilder::default();

        b.open_section(SectionId::Home);
        b.push_element(Block::Hero, rows::HERO, statics.hero, Hook::HeroContent);
        b.push_element(Block::Profile, rows::PROFILE, statics.profile, Hook::ProfileContainer);
        b.close_section();

        b.open_section(SectionId::About);
        b.push_title(statics, SectionId::About);
        b.push(Block::About, rows::ABOUT);
        b.close_section();

        b.open_section(SectionId::Skills);
        b.push_title(statics, SectionId::Skills);
        for (category, (group, bars)) in statics
            .skill_categories
            .iter()
            .zip(&statics.skill_bars)
            .enumerate()
        {
            b.open_group(*group, Hook::SkillCategory);
            b.push(Block::SkillCategoryHeader { category }, rows::SKILL_CATEGORY_HEADER);
            for (skill, bar) in bars.iter().enumerate() {
                b.push_element(
                    Block::Skill { category, skill },
                    rows::SKILL,
                    *bar,
                    Hook::SkillProgress,
                );
            }
            b.close_group();
            b.push(Block::Spacer, 1);
        }
        b.close_section();

        b.open_section(SectionId::Projects);
        b.push_title(statics, SectionId::Projects);
        b.push(Block::FilterBar, rows::FILTER_BAR);
        if cards.is_empty() {
            b.push(Block::EmptyGrid, rows::EMPTY_GRID);
        }
        for (element, project_id) in cards {
            b.push_element(
                Block::ProjectCard { project_id: *project_id },
                rows::PROJECT_CARD,
                *element,
                Hook::FeaturedCard,
            );
        }
        b.close_section();

        b.open_section(SectionId::Contact);
        b.push_title(statics, SectionId::Contact);
        b.push_element(
            Block::ContactInfo,
            rows::CONTACT_INFO,
            statics.contact_info,
            Hook::ContactInfo,
        );
        b.push(Block::Spacer, 1);
        b.push_element(
            Block::ContactForm,
            rows::CONTACT_FORM,
            statics.contact_form,
            Hook::ContactForm,
        );
        b.close_section();

        b.push(Block::Footer, rows::FOOTER);
        b.finish()
    }

    /// Blocks in page order.
    pub fn blocks(&self) -> &[Placed] {
        &self.blocks
    }

    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionBounds> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// All elements matching `hook`, in page order.
    pub fn select(&self, hook: Hook) -> Vec<ElementId> {
        let mut found: Vec<(ElementId, u32)> = self
            .elements
            .iter()
            .filter(|(_, (h, _))| *h == hook)
            .map(|(id, (_, span))| (*id, span.top))
            .collect();
        found.sort_by_key(|(id, top)| (*top, *id));
        found.into_iter().map(|(id, _)| id).collect()
    }

    /// Element geometry, `None` when the element is not on the page.
    pub fn rect(&self, element: ElementId) -> Option<Span> {
        self.elements.get(&element).map(|(_, span)| *span)
    }

    pub fn total_rows(&self) -> u32 {
        self.total_rows
    }
}

/// Accumulates blocks top to bottom.
#[derive(Default)]
struct PageBuilder {
    row: u32,
    blocks: Vec<Placed>,
    sections: Vec<SectionBounds>,
    elements: HashMap<ElementId, (Hook, Span)>,
    open_section: Option<(SectionId, u32)>,
    open_group: Option<(ElementId, Hook, u32)>,
}

impl PageBuilder {
    fn push_block(&mut self, block: Block, rows: u16, element: Option<ElementId>) {
        self.blocks.push(Placed {
            block,
            element,
            group: self.open_group.map(|(id, _, _)| id),
            row: self.row,
            rows,
        });
        self.row += u32::from(rows);
    }

    fn push(&mut self, block: Block, rows: u16) {
        self.push_block(block, rows, None);
    }

    fn push_element(&mut self, block: Block, rows: u16, element: ElementId, hook: Hook) {
        let span = rows_to_span(self.row, u32::from(rows));
        self.elements.insert(element, (hook, span));
        self.push_block(block, rows, Some(element));
    }

    fn push_title(&mut self, statics: &StaticElements, section: SectionId) {
        match statics.title(section) {
            Some(id) => self.push_element(
                Block::SectionTitle(section),
                rows::SECTION_TITLE,
                id,
                Hook::SectionTitle,
            ),
            None => self.push(Block::SectionTitle(section), rows::SECTION_TITLE),
        }
    }

    fn open_group(&mut self, element: ElementId, hook: Hook) {
        self.open_group = Some((element, hook, self.row));
    }

    fn close_group(&mut self) {
        if let Some((element, hook, start)) = self.open_group.take() {
            let span = rows_to_span(start, self.row - start);
            self.elements.insert(element, (hook, span));
        }
    }

    fn open_section(&mut self, id: SectionId) {
        self.open_section = Some((id, self.row));
        self.push(Block::Spacer, rows::SECTION_PADDING);
    }

    fn close_section(&mut self) {
        self.push(Block::Spacer, rows::SECTION_PADDING);
        if let Some((id, start)) = self.open_section.take() {
            self.sections.push(SectionBounds {
                id,
                span: rows_to_span(start, self.row - start),
            });
        }
    }

    fn finish(self) -> PageLayout {
        PageLayout {
            blocks: self.blocks,
            sections: self.sections,
            elements: self.elements,
            total_rows: self.row,
        }
    }
}

fn rows_to_span(row: u32, rows: u32) -> Span {
    Span::new(row * CELL_HEIGHT_PX, rows * CELL_HEIGHT_PX)
}

/// Vertical offsets (in pixels) of the decorative background shapes.
///
/// Shape `i` drifts up at `0.5 + 0.1 * i` times the scroll speed.
pub fn parallax_offsets(scroll_y: u32, shapes: usize) -> Vec<i64> {
    (0..shapes)
        .map(|index| {
            let speed = 0.5 + index as f64 * 0.1;
            -(f64::from(scroll_y) * speed).round() as i64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_with_cards(cards: usize) -> (StaticElements, Vec<ElementId>, PageLayout) {
        let mut ids = ElementIds::new();
        let statics = StaticElements::allocate(&mut ids, &[3, 2]);
        let card_ids = ids.allocate_many(cards);
        let cards: Vec<(ElementId, u32)> = card_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i as u32 + 1))
            .collect();
        let layout = PageLayout::compose(&statics, &cards);
        (statics, card_ids, layout)
    }

    #[test]
    fn test_sections_are_contiguous_and_ordered() {
        let (_, _, layout) = layout_with_cards(2);
        let sections = layout.sections();

        assert_eq!(
            sections.iter().map(|s| s.id).collect::<Vec<_>>(),
            SectionId::ALL.to_vec()
        );
        assert_eq!(sections[0].span.top, 0);
        for pair in sections.windows(2) {
            assert_eq!(pair[0].span.bottom(), pair[1].span.top);
        }
    }

    #[test]
    fn test_home_section_covers_first_probe() {
        let (_, _, layout) = layout_with_cards(0);
        let home = layout.section(SectionId::Home).unwrap();
        assert!(home.span.contains(150));
    }

    #[test]
    fn test_select_returns_page_order() {
        let (_, card_ids, layout) = layout_with_cards(3);
        assert_eq!(layout.select(Hook::FeaturedCard), card_ids);
    }

    #[test]
    fn test_select_with_no_matches_is_empty() {
        let (_, _, layout) = layout_with_cards(0);
        assert!(layout.select(Hook::FeaturedCard).is_empty());
        assert!(layout
            .blocks()
            .iter()
            .any(|p| p.block == Block::EmptyGrid));
    }

    #[test]
    fn test_skill_category_spans_its_bars() {
        let (statics, _, layout) = layout_with_cards(0);
        let category = layout.rect(statics.skill_categories[0]).unwrap();
        for bar in &statics.skill_bars[0] {
            let bar = layout.rect(*bar).unwrap();
            assert_eq!(bar.overlap(&category), bar.height);
        }
    }

    #[test]
    fn test_removed_elements_have_no_rect() {
        let (statics, card_ids, _) = layout_with_cards(2);
        let layout = PageLayout::compose(&statics, &[]);
        assert!(layout.rect(card_ids[0]).is_none());
    }

    #[test]
    fn test_geometry_is_whole_rows() {
        let (_, _, layout) = layout_with_cards(1);
        for section in layout.sections() {
            assert_eq!(section.span.top % CELL_HEIGHT_PX, 0);
            assert_eq!(section.span.height % CELL_HEIGHT_PX, 0);
        }
    }

    #[test]
    fn test_span_overlap() {
        let a = Span::new(0, 100);
        assert_eq!(a.overlap(&Span::new(50, 100)), 50);
        assert_eq!(a.overlap(&Span::new(100, 10)), 0);
        assert_eq!(a.overlap(&Span::new(10, 10)), 10);
    }

    #[test]
    fn test_section_from_link() {
        assert_eq!(SectionId::from_link("#skills"), Some(SectionId::Skills));
        assert_eq!(SectionId::from_link("#"), None);
        assert_eq!(SectionId::from_link("skills"), None);
    }

    #[test]
    fn test_parallax_speeds() {
        assert_eq!(parallax_offsets(0, 3), vec![0, 0, 0]);
        assert_eq!(parallax_offsets(100, 3), vec![-50, -60, -70]);
    }
}
