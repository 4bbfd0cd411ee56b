use heroes_core::Hero;

/// The roster the backend starts with.
pub fn default_heroes() -> Vec<Hero> {
    [
        (12, "Dr. Nice"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr. IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero::new(id, name))
    .collect()
}
