// src/country.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Source-site label → canonical label. Labels already in canonical form are omitted and
/// pass through untouched. The aggregate marker `Total` must never appear here.
static COUNTRY_LABELS: &[(&str, &str)] = &[
    ("Afeganistão", "Afghanistan"),
    ("África do Sul", "South Africa"),
    ("Alemanha", "Germany"),
    ("Alemanha, República Democrática", "Germany"),
    ("Antígua e Barbuda", "Antigua and Barbuda"),
    ("Antilhas Holandesas", "Netherlands Antilles"),
    ("Arábia Saudita", "Saudi Arabia"),
    ("Argélia", "Algeria"),
    ("Armênia", "Armenia"),
    ("Austrália", "Australia"),
    ("Áustria", "Austria"),
    ("Barein", "Bahrain"),
    ("Bélgica", "Belgium"),
    ("Belice", "Belize"),
    ("Bermudas", "Bermuda"),
    ("Bielorrússia", "Belarus"),
    ("Bolívia", "Bolivia"),
    ("Bósnia-Herzegovina", "Bosnia and Herzegovina"),
    ("Brasil", "Brazil"),
    ("Bulgária", "Bulgaria"),
    ("Cabo Verde", "Cape Verde"),
    ("Camarões", "Cameroon"),
    ("Canadá", "Canada"),
    ("Catar", "Qatar"),
    ("Cayman, Ilhas", "Cayman Islands"),
    ("Cazaquistão", "Kazakhstan"),
    ("Chipre", "Cyprus"),
    ("Cingapura", "Singapore"),
    ("Singapura", "Singapore"),
    ("Cocos (Keeling), Ilhas", "Cocos (Keeling) Islands"),
    ("Colômbia", "Colombia"),
    ("Comores", "Comoros"),
    ("Coreia, Republica Sul", "South Korea"),
    ("Coreia do Sul", "South Korea"),
    ("Costa do Marfim", "Ivory Coast"),
    ("Croácia", "Croatia"),
    ("Curaçao", "Curacao"),
    ("Dinamarca", "Denmark"),
    ("Egito", "Egypt"),
    ("Emirados Arabes Unidos", "United Arab Emirates"),
    ("Emirados Árabes Unidos", "United Arab Emirates"),
    ("Equador", "Ecuador"),
    ("Eslovaca, Republica", "Slovakia"),
    ("Eslováquia", "Slovakia"),
    ("Eslovênia", "Slovenia"),
    ("Espanha", "Spain"),
    ("Estados Unidos", "United States"),
    ("Estônia", "Estonia"),
    ("Filipinas", "Philippines"),
    ("Finlândia", "Finland"),
    ("França", "France"),
    ("Gana", "Ghana"),
    ("Geórgia", "Georgia"),
    ("Granada", "Grenada"),
    ("Grécia", "Greece"),
    ("Guiana", "Guyana"),
    ("Guiana Francesa", "French Guiana"),
    ("Guine Bissau", "Guinea-Bissau"),
    ("Guiné Equatorial", "Equatorial Guinea"),
    ("Guine Equatorial", "Equatorial Guinea"),
    ("Holanda", "Netherlands"),
    ("Hungria", "Hungary"),
    ("Ilhas Virgens", "Virgin Islands"),
    ("Índia", "India"),
    ("Indonésia", "Indonesia"),
    ("Irã", "Iran"),
    ("Iraque", "Iraq"),
    ("Irlanda", "Ireland"),
    ("Islândia", "Iceland"),
    ("Itália", "Italy"),
    ("Japão", "Japan"),
    ("Jordânia", "Jordan"),
    ("Letônia", "Latvia"),
    ("Líbano", "Lebanon"),
    ("Libéria", "Liberia"),
    ("Lituânia", "Lithuania"),
    ("Luxemburgo", "Luxembourg"),
    ("Malásia", "Malaysia"),
    ("Marrocos", "Morocco"),
    ("Marshall, Ilhas", "Marshall Islands"),
    ("México", "Mexico"),
    ("Moçambique", "Mozambique"),
    ("Namíbia", "Namibia"),
    ("Nicarágua", "Nicaragua"),
    ("Nigéria", "Nigeria"),
    ("Noruega", "Norway"),
    ("Nova Caledônia", "New Caledonia"),
    ("Nova Zelândia", "New Zealand"),
    ("Países Baixos", "Netherlands"),
    ("Panamá", "Panama"),
    ("Paraguai", "Paraguay"),
    ("Polônia", "Poland"),
    ("Porto Rico", "Puerto Rico"),
    ("Quênia", "Kenya"),
    ("Reino Unido", "United Kingdom"),
    ("República Dominicana", "Dominican Republic"),
    ("Romênia", "Romania"),
    ("Rússia", "Russia"),
    ("São Cristóvão e Névis", "Saint Kitts and Nevis"),
    ("São Tomé e Príncipe", "Sao Tome and Principe"),
    ("São Vicente e Granadinas", "Saint Vincent and the Grenadines"),
    ("Serra Leoa", "Sierra Leone"),
    ("Síria", "Syria"),
    ("Suécia", "Sweden"),
    ("Suíça", "Switzerland"),
    ("Tailândia", "Thailand"),
    ("Taiwan (Formosa)", "Taiwan"),
    ("Tanzânia", "Tanzania"),
    ("Tcheca, República", "Czech Republic"),
    ("Toquelau", "Tokelau"),
    ("Trinidade Tobago", "Trinidad and Tobago"),
    ("Tunísia", "Tunisia"),
    ("Turquia", "Turkey"),
    ("Ucrânia", "Ukraine"),
    ("Uruguai", "Uruguay"),
    ("Vietnã", "Vietnam"),
];

static GLOBAL: Lazy<CountryMap> = Lazy::new(|| CountryMap::from_pairs(COUNTRY_LABELS));

/// Static translation table from source-site country labels to canonical labels.
///
/// Lookups for labels that are not in the table return the label unchanged, so applying
/// the map twice gives the same result as applying it once.
#[derive(Debug, Clone)]
pub struct CountryMap {
    labels: HashMap<&'static str, &'static str>,
}

impl CountryMap {
    /// The process-wide map, built on first use.
    pub fn global() -> &'static CountryMap {
        &GLOBAL
    }

    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            labels: pairs.iter().copied().collect(),
        }
    }

    /// Canonical label for `raw`, or `raw` itself when it has no entry.
    pub fn map<'a>(&self, raw: &'a str) -> &'a str {
        match self.labels.get(raw) {
            Some(canonical) => *canonical,
            None => raw,
        }
    }

    pub fn get(&self, raw: &str) -> Option<&'static str> {
        self.labels.get(raw).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
