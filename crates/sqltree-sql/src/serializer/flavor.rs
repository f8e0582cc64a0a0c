use super::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Ansi,
    Postgresql,
    Sqlite,
    Mysql,
}

impl Flavor {
    /// Character used to delimit quoted identifiers.
    pub(super) fn identifier_quote(self) -> char {
        match self {
            Flavor::Mysql => '`',
            Flavor::Ansi | Flavor::Postgresql | Flavor::Sqlite => '"',
        }
    }
}

impl Serializer {
    pub fn ansi() -> Serializer {
        Serializer {
            flavor: Flavor::Ansi,
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Serializer::ansi()
    }
}
