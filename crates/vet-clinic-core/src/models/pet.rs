//! Pet records: dogs and cats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ownership::OwnedItem;
use super::validation::{require_text, same_text, ValidationError, ValidationResult};

/// Oldest age a pet may be registered with.
pub const MAX_PET_AGE: i64 = 30;

/// Dog size. Input is matched case-insensitively; display uses the
/// clinic's canonical labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DogSize {
    Small,
    Medium,
    Large,
}

impl DogSize {
    /// Canonical label ("Pequeño", "Mediano", "Grande").
    pub fn as_str(&self) -> &'static str {
        match self {
            DogSize::Small => "Pequeño",
            DogSize::Medium => "Mediano",
            DogSize::Large => "Grande",
        }
    }
}

impl fmt::Display for DogSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DogSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = require_text("Dog size", s)?;
        let size = [
            ("pequeño", DogSize::Small),
            ("pequeno", DogSize::Small),
            ("small", DogSize::Small),
            ("mediano", DogSize::Medium),
            ("medium", DogSize::Medium),
            ("grande", DogSize::Large),
            ("large", DogSize::Large),
        ]
        .into_iter()
        .find(|(label, _)| same_text(label, &value))
        .map(|(_, size)| size);

        size.ok_or(ValidationError::InvalidValue {
            field: "dog size",
            value,
            expected: "Pequeño, Mediano, Grande",
        })
    }
}

/// Variant-specific pet data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "species")]
pub enum Species {
    Dog { size: DogSize },
    Cat { indoor: bool },
}

/// A pet, optionally attached to a client.
///
/// `owner` is a non-owning back-reference (the client's national id). It is
/// written only when a client attaches the pet and is never cleared.
#[derive(Debug, Clone, Serialize)]
pub struct Pet {
    name: String,
    age: u8,
    breed: String,
    owner: Option<String>,
    #[serde(flatten)]
    species: Species,
}

fn validate_age(age: i64) -> ValidationResult<u8> {
    if !(0..=MAX_PET_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "Age",
            value: age,
            min: 0,
            max: MAX_PET_AGE,
        });
    }
    Ok(age as u8)
}

impl Pet {
    fn new(name: &str, age: i64, breed: &str, species: Species) -> ValidationResult<Self> {
        Ok(Self {
            name: require_text("Pet name", name)?,
            age: validate_age(age)?,
            breed: require_text("Breed", breed)?,
            owner: None,
            species,
        })
    }

    /// Create a dog; `size` is parsed and canonicalized.
    pub fn dog(name: &str, age: i64, breed: &str, size: &str) -> ValidationResult<Self> {
        let pet = Self::new(name, age, breed, Species::Dog { size: DogSize::Small })?;
        let size = size.parse()?;
        Ok(Self {
            species: Species::Dog { size },
            ..pet
        })
    }

    /// Create a cat.
    pub fn cat(name: &str, age: i64, breed: &str, indoor: bool) -> ValidationResult<Self> {
        Self::new(name, age, breed, Species::Cat { indoor })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn species(&self) -> &Species {
        &self.species
    }

    /// National id of the owning client, if the pet was ever attached.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn set_name(&mut self, value: &str) -> ValidationResult<()> {
        self.name = require_text("Pet name", value)?;
        Ok(())
    }

    pub fn set_age(&mut self, value: i64) -> ValidationResult<()> {
        self.age = validate_age(value)?;
        Ok(())
    }

    pub fn set_breed(&mut self, value: &str) -> ValidationResult<()> {
        self.breed = require_text("Breed", value)?;
        Ok(())
    }

    /// Change a dog's size. Cats reject the call.
    pub fn set_size(&mut self, value: &str) -> ValidationResult<()> {
        match &mut self.species {
            Species::Dog { size } => {
                *size = value.parse()?;
                Ok(())
            }
            Species::Cat { .. } => Err(ValidationError::InvalidValue {
                field: "species",
                value: "Cat".into(),
                expected: "Dog",
            }),
        }
    }

    /// Change a cat's indoor flag. Dogs reject the call.
    pub fn set_indoor(&mut self, value: bool) -> ValidationResult<()> {
        match &mut self.species {
            Species::Cat { indoor } => {
                *indoor = value;
                Ok(())
            }
            Species::Dog { .. } => Err(ValidationError::InvalidValue {
                field: "species",
                value: "Dog".into(),
                expected: "Cat",
            }),
        }
    }

    pub fn dog_size(&self) -> Option<DogSize> {
        match self.species {
            Species::Dog { size } => Some(size),
            Species::Cat { .. } => None,
        }
    }

    pub fn is_indoor(&self) -> Option<bool> {
        match self.species {
            Species::Cat { indoor } => Some(indoor),
            Species::Dog { .. } => None,
        }
    }

    pub fn is_dog(&self) -> bool {
        matches!(self.species, Species::Dog { .. })
    }

    pub fn is_cat(&self) -> bool {
        matches!(self.species, Species::Cat { .. })
    }

    pub fn is_small(&self) -> bool {
        self.dog_size() == Some(DogSize::Small)
    }

    pub fn is_medium(&self) -> bool {
        self.dog_size() == Some(DogSize::Medium)
    }

    pub fn is_large(&self) -> bool {
        self.dog_size() == Some(DogSize::Large)
    }

    pub fn species_name(&self) -> &'static str {
        match self.species {
            Species::Dog { .. } => "Dog",
            Species::Cat { .. } => "Cat",
        }
    }

    pub fn make_sound(&self) -> &'static str {
        match self.species {
            Species::Dog {
                size: DogSize::Small,
            } => "Yip yip",
            Species::Dog {
                size: DogSize::Medium,
            } => "Woof woof",
            Species::Dog {
                size: DogSize::Large,
            } => "WOOF WOOF",
            Species::Cat { .. } => "Miau miau",
        }
    }

    pub fn specific_info(&self) -> String {
        match self.species {
            Species::Dog { size } => format!("Size: {}", size),
            Species::Cat { indoor: true } => "Cat type: Indoor cat".to_string(),
            Species::Cat { indoor: false } => "Cat type: Outdoor cat".to_string(),
        }
    }

    pub fn general_info(&self) -> String {
        format!(
            "Name: {}, Age: {} years, Breed: {}",
            self.name, self.age, self.breed
        )
    }

    /// Daily exercise recommendation. Only dogs get one.
    pub fn recommended_exercise(&self) -> Option<&'static str> {
        let size = self.dog_size()?;
        Some(match size {
            DogSize::Small => "30-45 minutes of daily exercise, short walks and indoor games",
            DogSize::Medium => "60-90 minutes of daily exercise, walks and active play",
            DogSize::Large => "90-120 minutes of daily exercise, long walks and intense exercise",
        })
    }

    /// Advisory care text; depends on size for dogs and indoor flag for cats.
    pub fn care_advice(&self) -> String {
        let mut advice = format!("Care advice for {}:\n", self.name);
        match self.species {
            Species::Dog { size } => {
                advice.push_str("- Daily exercise: ");
                advice.push_str(self.recommended_exercise().unwrap_or_default());
                advice.push('\n');
                advice.push_str("- Regular coat brushing\n");
                advice.push_str("- Obedience training\n");
                advice.push_str("- Socialization with other dogs\n");
                match size {
                    DogSize::Large => {
                        advice.push_str("- Special care for joints\n");
                        advice.push_str("- Weight control to avoid health problems");
                    }
                    DogSize::Small => {
                        advice.push_str("- Regular dental care\n");
                        advice.push_str("- Protection from the cold");
                    }
                    DogSize::Medium => {}
                }
            }
            Species::Cat { indoor } => {
                advice.push_str("- Keep the litter box clean\n");
                advice.push_str("- Provide scratching posts\n");
                advice.push_str("- Regular coat brushing\n");
                if indoor {
                    advice.push_str("- Provide mental stimulation with toys\n");
                    advice.push_str("- Consider catnip for enrichment");
                } else {
                    advice.push_str("- Check regularly for parasites\n");
                    advice.push_str("- Keep vaccinations up to date");
                }
            }
        }
        advice
    }

    /// Species-specific actions shown in detailed reports.
    pub fn special_actions(&self) -> Vec<String> {
        let name = &self.name;
        match self.species {
            Species::Dog { size } => {
                let intensity = match size {
                    DogSize::Small => "small hops",
                    DogSize::Medium => "moderate jumps",
                    DogSize::Large => "big leaps",
                };
                vec![
                    format!("{} is fetching the ball enthusiastically.", name),
                    format!("{} is wagging its tail happily.", name),
                    format!("{} is making {}.", name, intensity),
                ]
            }
            Species::Cat { indoor } => {
                let hunt = if indoor {
                    format!("{} is hunting toys at home.", name)
                } else {
                    format!("{} is hunting outdoors.", name)
                };
                vec![
                    format!("{} is purring: Prrrrr...", name),
                    format!("{} is climbing like every good cat.", name),
                    hunt,
                ]
            }
        }
    }
}

impl OwnedItem for Pet {
    const WHAT: &'static str = "pet";

    fn key(&self) -> &str {
        &self.name
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn set_owner(&mut self, owner_id: &str) {
        self.owner = Some(owner_id.to_string());
    }
}

/// Pets are the same when names match case-insensitively and they share an owner.
impl PartialEq for Pet {
    fn eq(&self, other: &Self) -> bool {
        same_text(&self.name, &other.name) && self.owner == other.owner
    }
}

impl Eq for Pet {}

/// Non-owning reference to a pet: its name plus its owner's national id.
#[derive(Debug, Clone, Serialize)]
pub struct PetRef {
    pub name: String,
    pub owner: Option<String>,
}

impl PetRef {
    pub fn matches(&self, pet: &Pet) -> bool {
        same_text(&self.name, pet.name()) && self.owner.as_deref() == pet.owner()
    }
}

impl From<&Pet> for PetRef {
    fn from(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            owner: pet.owner.clone(),
        }
    }
}

impl PartialEq for PetRef {
    fn eq(&self, other: &Self) -> bool {
        same_text(&self.name, &other.name) && self.owner == other.owner
    }
}

impl Eq for PetRef {}
