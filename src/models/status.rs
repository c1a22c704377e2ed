use serde::Serialize;
use std::fmt;

/// How worrying a classification is; drives terminal colouring only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Caution,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiStatus {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BmiStatus::Underweight => "Underweight",
            BmiStatus::Normal => "Normal",
            BmiStatus::Overweight => "Overweight",
            BmiStatus::Obese => "Obese",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            BmiStatus::Normal => Severity::Ok,
            BmiStatus::Underweight | BmiStatus::Overweight => Severity::Caution,
            BmiStatus::Obese => Severity::Alert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemperatureStatus {
    Hypothermia,
    Normal,
    Fever,
}

impl TemperatureStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureStatus::Hypothermia => "Hypothermia",
            TemperatureStatus::Normal => "Normal",
            TemperatureStatus::Fever => "Fever",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            TemperatureStatus::Normal => Severity::Ok,
            TemperatureStatus::Hypothermia | TemperatureStatus::Fever => Severity::Alert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BloodPressureStatus {
    HypertensiveCrisis,
    HypertensionStage1,
    PreHypertension,
    Normal,
    Hypotension,
    /// Reached only when no band above matches (systolic 140 or diastolic 90).
    NormalBorderline,
    InvalidFormat,
}

impl BloodPressureStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureStatus::HypertensiveCrisis => "Hypertensive Crisis",
            BloodPressureStatus::HypertensionStage1 => "Hypertension Stage 1",
            BloodPressureStatus::PreHypertension => "Pre-Hypertension",
            BloodPressureStatus::Normal => "Normal",
            BloodPressureStatus::Hypotension => "Hypotension",
            BloodPressureStatus::NormalBorderline => "Normal (borderline)",
            BloodPressureStatus::InvalidFormat => "Invalid Format",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            BloodPressureStatus::Normal => Severity::Ok,
            BloodPressureStatus::NormalBorderline
            | BloodPressureStatus::PreHypertension
            | BloodPressureStatus::InvalidFormat => Severity::Caution,
            BloodPressureStatus::HypertensiveCrisis
            | BloodPressureStatus::HypertensionStage1
            | BloodPressureStatus::Hypotension => Severity::Alert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OxygenStatus {
    Normal,
    Caution,
    Hypoxemia,
}

impl OxygenStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OxygenStatus::Normal => "Normal",
            OxygenStatus::Caution => "Caution",
            OxygenStatus::Hypoxemia => "Hypoxemia (Emergency)",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            OxygenStatus::Normal => Severity::Ok,
            OxygenStatus::Caution => Severity::Caution,
            OxygenStatus::Hypoxemia => Severity::Alert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlcoholStatus {
    Safe,
    Impaired,
    Danger,
}

impl AlcoholStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AlcoholStatus::Safe => "Safe",
            AlcoholStatus::Impaired => "Impaired",
            AlcoholStatus::Danger => "Danger",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            AlcoholStatus::Safe => Severity::Ok,
            AlcoholStatus::Impaired => Severity::Caution,
            AlcoholStatus::Danger => Severity::Alert,
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(
    BmiStatus,
    TemperatureStatus,
    BloodPressureStatus,
    OxygenStatus,
    AlcoholStatus
);

/// Severity of a persisted label, looked up by text.
///
/// Statuses are snapshotted as plain strings, so listing and stats work on
/// labels rather than enums. Unknown labels (hand edits) are `Caution`.
pub fn severity_of_label(label: &str) -> Severity {
    let all: [(&str, Severity); 17] = [
        (BmiStatus::Underweight.label(), BmiStatus::Underweight.severity()),
        (BmiStatus::Overweight.label(), BmiStatus::Overweight.severity()),
        (BmiStatus::Obese.label(), BmiStatus::Obese.severity()),
        ("Normal", Severity::Ok),
        (TemperatureStatus::Hypothermia.label(), Severity::Alert),
        (TemperatureStatus::Fever.label(), Severity::Alert),
        (
            BloodPressureStatus::HypertensiveCrisis.label(),
            Severity::Alert,
        ),
        (
            BloodPressureStatus::HypertensionStage1.label(),
            Severity::Alert,
        ),
        (
            BloodPressureStatus::PreHypertension.label(),
            Severity::Caution,
        ),
        (BloodPressureStatus::Hypotension.label(), Severity::Alert),
        (
            BloodPressureStatus::NormalBorderline.label(),
            Severity::Caution,
        ),
        (BloodPressureStatus::InvalidFormat.label(), Severity::Caution),
        (OxygenStatus::Caution.label(), Severity::Caution),
        (OxygenStatus::Hypoxemia.label(), Severity::Alert),
        (AlcoholStatus::Safe.label(), Severity::Ok),
        (AlcoholStatus::Impaired.label(), Severity::Caution),
        (AlcoholStatus::Danger.label(), Severity::Alert),
    ];

    let label = label.trim();
    all.iter()
        .find(|(l, _)| *l == label)
        .map(|(_, s)| *s)
        .unwrap_or(Severity::Caution)
}
