use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Department {
    Yantek,
    Billman,
    Cs,
    Security,
    Yanbung,
    P2tl,
    Dij,
    Driver,
}

impl Department {
    pub const ALL: [Department; 8] = [
        Department::Yantek,
        Department::Billman,
        Department::Cs,
        Department::Security,
        Department::Yanbung,
        Department::P2tl,
        Department::Dij,
        Department::Driver,
    ];

    /// Convert enum → store string
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Yantek => "Yantek",
            Department::Billman => "Billman",
            Department::Cs => "CS",
            Department::Security => "Security",
            Department::Yanbung => "Yanbung",
            Department::P2tl => "P2TL",
            Department::Dij => "DIJ",
            Department::Driver => "Driver",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkUnit {
    Asembagus,
    Panarukan,
    Besuki,
    Wonosari,
    Bondowoso,
}

impl WorkUnit {
    pub const ALL: [WorkUnit; 5] = [
        WorkUnit::Asembagus,
        WorkUnit::Panarukan,
        WorkUnit::Besuki,
        WorkUnit::Wonosari,
        WorkUnit::Bondowoso,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkUnit::Asembagus => "ULP Asembagus",
            WorkUnit::Panarukan => "ULP Panarukan",
            WorkUnit::Besuki => "ULP Besuki",
            WorkUnit::Wonosari => "ULP Wonosari",
            WorkUnit::Bondowoso => "ULP Bondowoso",
        }
    }

    /// Accepts both the full name ("ULP Besuki") and the bare place ("besuki").
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        let bare = code
            .strip_prefix("ULP ")
            .or_else(|| code.strip_prefix("ulp "))
            .unwrap_or(code)
            .trim();

        Self::ALL.into_iter().find(|u| {
            u.as_str().eq_ignore_ascii_case(code)
                || u.as_str()
                    .trim_start_matches("ULP ")
                    .eq_ignore_ascii_case(bare)
        })
    }
}
