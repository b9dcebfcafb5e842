//! Page sections and navbar links

/// A navigable section of the portfolio page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Resume,
    Projects,
    Certificates,
    Articles,
    Contact,
}

impl Section {
    /// Navbar order
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Resume,
        Section::Projects,
        Section::Certificates,
        Section::Articles,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Resume => "Resume",
            Section::Projects => "Projects",
            Section::Certificates => "Certificates",
            Section::Articles => "Articles",
            Section::Contact => "Contact",
        }
    }

    /// Jump key shown next to the navbar link ('1'..='7')
    pub fn key(&self) -> char {
        let index = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        char::from(b'1' + index as u8)
    }

    pub fn from_key(c: char) -> Option<Section> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}
