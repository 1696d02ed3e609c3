use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

/// Display grouping for crime types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CrimeCategory {
    #[serde(rename = "Violent Crimes")]
    ViolentCrimes,
    #[serde(rename = "Property Crimes")]
    PropertyCrimes,
    #[serde(rename = "Drug Related")]
    DrugRelated,
    #[serde(rename = "Traffic & Vehicle")]
    TrafficAndVehicle,
    #[serde(rename = "Public Order")]
    PublicOrder,
    #[serde(rename = "Against Government")]
    AgainstGovernment,
    #[serde(rename = "Cybercrime")]
    Cybercrime,
    #[serde(rename = "Other")]
    Other,
}

impl CrimeCategory {
    /// Categories in display order
    pub const ALL: [CrimeCategory; 8] = [
        CrimeCategory::ViolentCrimes,
        CrimeCategory::PropertyCrimes,
        CrimeCategory::DrugRelated,
        CrimeCategory::TrafficAndVehicle,
        CrimeCategory::PublicOrder,
        CrimeCategory::AgainstGovernment,
        CrimeCategory::Cybercrime,
        CrimeCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CrimeCategory::ViolentCrimes => "Violent Crimes",
            CrimeCategory::PropertyCrimes => "Property Crimes",
            CrimeCategory::DrugRelated => "Drug Related",
            CrimeCategory::TrafficAndVehicle => "Traffic & Vehicle",
            CrimeCategory::PublicOrder => "Public Order",
            CrimeCategory::AgainstGovernment => "Against Government",
            CrimeCategory::Cybercrime => "Cybercrime",
            CrimeCategory::Other => "Other",
        }
    }
}

macro_rules! crime_types {
    ($( $variant:ident => ($code:literal, $label:literal, $category:ident) ),+ $(,)?) => {
        /// Classification tag stored on a case. Serialized as its upper-snake code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CrimeType {
            $($variant),+
        }

        impl CrimeType {
            /// Every crime type, grouped by category in display order
            pub const ALL: &'static [CrimeType] = &[$(CrimeType::$variant),+];

            pub fn code(self) -> &'static str {
                match self {
                    $(CrimeType::$variant => $code),+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $(CrimeType::$variant => $label),+
                }
            }

            pub fn category(self) -> CrimeCategory {
                match self {
                    $(CrimeType::$variant => CrimeCategory::$category),+
                }
            }
        }
    };
}

crime_types! {
    // Violent Crimes
    Murder => ("MURDER", "Murder", ViolentCrimes),
    Manslaughter => ("MANSLAUGHTER", "Manslaughter", ViolentCrimes),
    Assault => ("ASSAULT", "Assault", ViolentCrimes),
    Battery => ("BATTERY", "Battery", ViolentCrimes),
    AggravatedAssault => ("AGGRAVATED_ASSAULT", "Aggravated Assault", ViolentCrimes),
    DomesticViolence => ("DOMESTIC_VIOLENCE", "Domestic Violence", ViolentCrimes),
    ChildAbuse => ("CHILD_ABUSE", "Child Abuse", ViolentCrimes),
    ElderAbuse => ("ELDER_ABUSE", "Elder Abuse", ViolentCrimes),
    Kidnapping => ("KIDNAPPING", "Kidnapping", ViolentCrimes),
    SexualAssault => ("SEXUAL_ASSAULT", "Sexual Assault", ViolentCrimes),
    Rape => ("RAPE", "Rape", ViolentCrimes),
    Robbery => ("ROBBERY", "Robbery", ViolentCrimes),
    ArmedRobbery => ("ARMED_ROBBERY", "Armed Robbery", ViolentCrimes),

    // Property Crimes
    Theft => ("THEFT", "Theft", PropertyCrimes),
    PettyTheft => ("PETTY_THEFT", "Petty Theft", PropertyCrimes),
    GrandTheft => ("GRAND_THEFT", "Grand Theft", PropertyCrimes),
    Burglary => ("BURGLARY", "Burglary", PropertyCrimes),
    BreakingAndEntering => ("BREAKING_AND_ENTERING", "Breaking and Entering", PropertyCrimes),
    Vandalism => ("VANDALISM", "Vandalism", PropertyCrimes),
    Arson => ("ARSON", "Arson", PropertyCrimes),
    Fraud => ("FRAUD", "Fraud", PropertyCrimes),
    Embezzlement => ("EMBEZZLEMENT", "Embezzlement", PropertyCrimes),
    Forgery => ("FORGERY", "Forgery", PropertyCrimes),
    IdentityTheft => ("IDENTITY_THEFT", "Identity Theft", PropertyCrimes),
    CreditCardFraud => ("CREDIT_CARD_FRAUD", "Credit Card Fraud", PropertyCrimes),

    // Drug Related
    DrugPossession => ("DRUG_POSSESSION", "Drug Possession", DrugRelated),
    DrugTrafficking => ("DRUG_TRAFFICKING", "Drug Trafficking", DrugRelated),
    DrugManufacturing => ("DRUG_MANUFACTURING", "Drug Manufacturing", DrugRelated),
    DuiDwi => ("DUI_DWI", "DUI/DWI", DrugRelated),
    PublicIntoxication => ("PUBLIC_INTOXICATION", "Public Intoxication", DrugRelated),

    // Traffic & Vehicle
    PoliceChase => ("POLICE_CHASE", "Police Chase", TrafficAndVehicle),
    EludingPolice => ("ELUDING_POLICE", "Eluding Police", TrafficAndVehicle),
    RecklessDriving => ("RECKLESS_DRIVING", "Reckless Driving", TrafficAndVehicle),
    HitAndRun => ("HIT_AND_RUN", "Hit and Run", TrafficAndVehicle),
    DrivingWithoutLicense => ("DRIVING_WITHOUT_LICENSE", "Driving Without License", TrafficAndVehicle),
    VehicularManslaughter => ("VEHICULAR_MANSLAUGHTER", "Vehicular Manslaughter", TrafficAndVehicle),

    // Public Order
    DisorderlyConduct => ("DISORDERLY_CONDUCT", "Disorderly Conduct", PublicOrder),
    DisturbingPeace => ("DISTURBING_PEACE", "Disturbing the Peace", PublicOrder),
    Trespassing => ("TRESPASSING", "Trespassing", PublicOrder),
    Loitering => ("LOITERING", "Loitering", PublicOrder),
    Prostitution => ("PROSTITUTION", "Prostitution", PublicOrder),
    WeaponsViolation => ("WEAPONS_VIOLATION", "Weapons Violation", PublicOrder),
    FirearmPossession => ("FIREARM_POSSESSION", "Illegal Firearm Possession", PublicOrder),

    // Against Government
    AttackingOfficer => ("ATTACKING_OFFICER", "Attacking Officer", AgainstGovernment),
    ResistingArrest => ("RESISTING_ARREST", "Resisting Arrest", AgainstGovernment),
    ObstructionOfJustice => ("OBSTRUCTION_OF_JUSTICE", "Obstruction of Justice", AgainstGovernment),
    ContemptOfCourt => ("CONTEMPT_OF_COURT", "Contempt of Court", AgainstGovernment),
    TaxEvasion => ("TAX_EVASION", "Tax Evasion", AgainstGovernment),
    Bribery => ("BRIBERY", "Bribery", AgainstGovernment),
    Perjury => ("PERJURY", "Perjury", AgainstGovernment),

    // Cybercrime
    Cybercrime => ("CYBERCRIME", "Cybercrime", Cybercrime),
    Hacking => ("HACKING", "Hacking", Cybercrime),
    OnlineFraud => ("ONLINE_FRAUD", "Online Fraud", Cybercrime),

    // Other
    ParoleViolation => ("PAROLE_VIOLATION", "Parole Violation", Other),
    ProbationViolation => ("PROBATION_VIOLATION", "Probation Violation", Other),
    Warrant => ("WARRANT", "Warrant", Other),
    FailureToAppear => ("FAILURE_TO_APPEAR", "Failure to Appear", Other),
    Other => ("OTHER", "Other", Other),
}

impl CrimeType {
    /// Strict lookup by code (case-insensitive)
    pub fn parse_code(code: &str) -> Option<CrimeType> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(code))
    }

    /// Lookup by code, falling back to [`CrimeType::Other`] for anything unknown
    pub fn from_code(code: &str) -> CrimeType {
        Self::parse_code(code).unwrap_or(CrimeType::Other)
    }

    pub fn in_category(category: CrimeCategory) -> impl Iterator<Item = CrimeType> {
        Self::ALL
            .iter()
            .copied()
            .filter(move |t| t.category() == category)
    }
}

impl Default for CrimeType {
    fn default() -> Self {
        CrimeType::Other
    }
}

impl fmt::Display for CrimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for CrimeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for CrimeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        let crime_type = CrimeType::from_code(&code);
        if crime_type == CrimeType::Other && !code.trim().eq_ignore_ascii_case("OTHER") {
            tracing::debug!("Unrecognized crime type '{}', using OTHER", code);
        }
        Ok(crime_type)
    }
}
