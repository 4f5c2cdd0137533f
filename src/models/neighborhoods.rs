/// A neighborhood the marketplace knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub city: &'static str,
    pub name: &'static str,
}

/// Neighborhoods offered in the filter panel and the valuation form
pub const NEIGHBORHOODS: [Neighborhood; 11] = [
    Neighborhood { city: "Salvador", name: "Pituba" },
    Neighborhood { city: "Salvador", name: "Barra" },
    Neighborhood { city: "Salvador", name: "Horto Florestal" },
    Neighborhood { city: "Salvador", name: "Caminho das Árvores" },
    Neighborhood { city: "Salvador", name: "Vitória" },
    Neighborhood { city: "Salvador", name: "Graça" },
    Neighborhood { city: "Salvador", name: "Ondina" },
    Neighborhood { city: "Lauro de Freitas", name: "Buraquinho" },
    Neighborhood { city: "Lauro de Freitas", name: "Alphaville Litoral Norte" },
    Neighborhood { city: "Lauro de Freitas", name: "Vilas do Atlântico" },
    Neighborhood { city: "Mata de São João", name: "Praia do Forte" },
];

pub fn is_known_neighborhood(name: &str) -> bool {
    NEIGHBORHOODS.iter().any(|n| n.name == name)
}
