//! Skill bars.
//!
//! Each bar carries a target level and starts empty. Once the bar is half
//! visible the app waits a short delay and fills it to its level.

/// A single skill with its proficiency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Target fill, 0..=100.
    pub level: u8,
}

/// A titled group of skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub skills: Vec<Skill>,
}

/// The skill groups shown on the page.
pub fn default_categories() -> Vec<SkillCategory> {
    fn skill(name: &'static str, level: u8) -> Skill {
        Skill { name, level }
    }

    vec![
        SkillCategory {
            name: "Frontend",
            icon: "◧",
            skills: vec![
                skill("JavaScript / TypeScript", 92),
                skill("React", 88),
                skill("Vue.js", 75),
                skill("CSS / Tailwind", 85),
            ],
        },
        SkillCategory {
            name: "Backend",
            icon: "◨",
            skills: vec![
                skill("Node.js", 87),
                skill("Python", 90),
                skill("Go", 70),
                skill("PostgreSQL", 80),
            ],
        },
        SkillCategory {
            name: "Tools & Platforms",
            icon: "⚙",
            skills: vec![
                skill("Docker", 82),
                skill("Git", 93),
                skill("TensorFlow", 68),
            ],
        },
    ]
}

/// Fill state of every bar.
#[derive(Debug, Clone)]
pub struct SkillBoard {
    categories: Vec<SkillCategory>,
    /// Current fill per bar, indexed like `categories[c].skills[s]`.
    fills: Vec<Vec<u8>>,
}

impl SkillBoard {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        let fills = categories
            .iter()
            .map(|c| vec![0; c.skills.len()])
            .collect();
        Self { categories, fills }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// Number of bars in each category.
    pub fn shape(&self) -> Vec<usize> {
        self.categories.iter().map(|c| c.skills.len()).collect()
    }

    /// Fills a bar to its level. Unknown bars are ignored.
    pub fn fill(&mut self, category: usize, skill: usize) -> Option<u8> {
        let level = self.categories.get(category)?.skills.get(skill)?.level.min(100);
        let slot = self.fills.get_mut(category)?.get_mut(skill)?;
        *slot = level;
        Some(level)
    }

    /// Current fill of a bar.
    pub fn fill_of(&self, category: usize, skill: usize) -> u8 {
        self.fills
            .get(category)
            .and_then(|c| c.get(skill))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_start_empty() {
        let board = SkillBoard::new(default_categories());
        for (c, category) in board.categories().iter().enumerate() {
            for s in 0..category.skills.len() {
                assert_eq!(board.fill_of(c, s), 0);
            }
        }
    }

    #[test]
    fn test_fill_sets_level() {
        let mut board = SkillBoard::new(default_categories());
        let level = board.categories()[1].skills[1].level;

        assert_eq!(board.fill(1, 1), Some(level));
        assert_eq!(board.fill_of(1, 1), level);
        assert_eq!(board.fill_of(1, 0), 0);
    }

    #[test]
    fn test_fill_unknown_bar_is_ignored() {
        let mut board = SkillBoard::new(default_categories());
        assert_eq!(board.fill(9, 0), None);
        assert_eq!(board.fill(0, 99), None);
    }

    #[test]
    fn test_shape_matches_categories() {
        let board = SkillBoard::new(default_categories());
        assert_eq!(board.shape(), vec![4, 4, 3]);
    }

    #[test]
    fn test_levels_are_percentages() {
        for category in default_categories() {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} over 100", skill.name);
            }
        }
    }
}
