//! Known region names and size descriptors.
//!
//! Both tables are scanned in order and the first hit wins, so entry order
//! is part of their meaning.

use crate::models::StarSize;

const ANACHRONIA: &str = "Anachronia";
const ASGARNIA: &str = "Asgarnia";
const ASHDALE: &str = "Ashdale";
const CRANDOR_KARAMJA: &str = "Crandor/Karamja";
const DAEMONHEIM: &str = "Daemonheim";
const FELDIP_HILLS: &str = "Feldip Hills";
const FREMENNIK_LUNAR: &str = "Fremennik/Lunar Isle";
const KANDARIN: &str = "Kandarin";
const KHARIDIAN_DESERT: &str = "Kharidian Desert";
const LOST_GROVE: &str = "Lost Grove";
const MENAPHOS: &str = "Menaphos";
const MISTHALIN: &str = "Misthalin";
const MORYTANIA: &str = "Morytania/Mos Le'Harmless";
const PISCATORIS: &str = "Piscatoris/Gnome/Tirannwn";
const TUSKA: &str = "Tuska";
const WILDERNESS: &str = "Wilderness";

/// How a location key relates to the region it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// The region name as it appears in the dialog.
    Name,
    /// A trailing fragment or known misspelling left over when OCR drops
    /// leading characters.
    Fragment,
}

/// One entry of the location table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationKey {
    /// Substring searched for in the cleaned text.
    pub pattern: &'static str,
    /// Canonical region label.
    pub region: &'static str,
    pub kind: KeyKind,
}

const fn name(pattern: &'static str, region: &'static str) -> LocationKey {
    LocationKey {
        pattern,
        region,
        kind: KeyKind::Name,
    }
}

const fn fragment(pattern: &'static str, region: &'static str) -> LocationKey {
    LocationKey {
        pattern,
        region,
        kind: KeyKind::Fragment,
    }
}

/// Region keys in match order. Fragments are chosen so that no fragment
/// occurs in another region's name or in the fixed dialog wording.
pub const LOCATIONS: &[LocationKey] = &[
    name("Anachronia", ANACHRONIA),
    fragment("onia", ANACHRONIA),
    name("Asgarnia", ASGARNIA),
    fragment("Asgania", ASGARNIA),
    fragment("rnia", ASGARNIA),
    name("Ashdale", ASHDALE),
    fragment("dale", ASHDALE),
    name("Crandor", CRANDOR_KARAMJA),
    fragment("amja", CRANDOR_KARAMJA),
    name("Daemonheim", DAEMONHEIM),
    fragment("sula", DAEMONHEIM),
    name("Feldip", FELDIP_HILLS),
    fragment("ills", FELDIP_HILLS),
    name("Fremennik", FREMENNIK_LUNAR),
    fragment("unar", FREMENNIK_LUNAR),
    name("Kandarin", KANDARIN),
    fragment("arin", KANDARIN),
    name("Desert", KHARIDIAN_DESERT),
    fragment("dian", KHARIDIAN_DESERT),
    name("Grove", LOST_GROVE),
    fragment("ost", LOST_GROVE),
    name("Menaphos", MENAPHOS),
    fragment("phos", MENAPHOS),
    name("Misthalin", MISTHALIN),
    fragment("alin", MISTHALIN),
    name("Morytania", MORYTANIA),
    fragment("armless", MORYTANIA),
    name("Piscatoris", PISCATORIS),
    fragment("nnwn", PISCATORIS),
    name("Tuska", TUSKA),
    fragment("uska", TUSKA),
    name("Wilderness", WILDERNESS),
    fragment("derness", WILDERNESS),
];

/// Size descriptors from tier 1 and tier 2 telescopes. Two-word phrases
/// come first so they win over the single word they contain.
pub const SIZE_DESCRIPTORS: &[(&str, StarSize)] = &[
    ("very small", StarSize::Small),
    ("fairly small", StarSize::Small),
    ("fairly big", StarSize::Average),
    ("very big", StarSize::Big),
    ("small", StarSize::Small),
    ("average", StarSize::Average),
    ("big", StarSize::Big),
];

/// All distinct region labels, in table order.
pub fn regions() -> Vec<&'static str> {
    let mut regions: Vec<&'static str> = Vec::new();
    for key in LOCATIONS {
        if !regions.contains(&key.region) {
            regions.push(key.region);
        }
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_has_a_name_and_a_fragment() {
        for region in regions() {
            let kinds: Vec<KeyKind> = LOCATIONS
                .iter()
                .filter(|k| k.region == region)
                .map(|k| k.kind)
                .collect();
            assert!(kinds.contains(&KeyKind::Name), "{} has no name key", region);
            assert!(kinds.contains(&KeyKind::Fragment), "{} has no fragment key", region);
        }
    }

    #[test]
    fn test_region_count() {
        assert_eq!(regions().len(), 16);
    }

    #[test]
    fn test_multi_word_descriptors_precede_their_single_words() {
        for (i, (phrase, _)) in SIZE_DESCRIPTORS.iter().enumerate() {
            for (shorter, _) in &SIZE_DESCRIPTORS[..i] {
                assert!(
                    !phrase.contains(shorter),
                    "{:?} is shadowed by earlier {:?}",
                    phrase,
                    shorter
                );
            }
        }
    }
}
