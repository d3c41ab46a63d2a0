//! Word pools for pt-BR synthetic values

pub(super) const MALE_FIRST_NAMES: &[&str] = &[
    "João", "José", "Carlos", "Marcos", "Ricardo", "Paulo", "Pedro", "Lucas", "Gabriel", "Rafael",
    "Eduardo", "Fernando", "André", "Bruno", "Gustavo", "Felipe", "Rodrigo", "Thiago", "Antônio",
    "Luiz",
];

pub(super) const FEMALE_FIRST_NAMES: &[&str] = &[
    "Maria", "Ana", "Juliana", "Helena", "Lúcia", "Fernanda", "Patrícia", "Camila", "Beatriz",
    "Larissa", "Mariana", "Gabriela", "Aline", "Carolina", "Letícia", "Vanessa", "Renata",
    "Luana", "Isabela", "Cristina",
];

pub(super) const LAST_NAMES: &[&str] = &[
    "Silva", "Souza", "Oliveira", "Santos", "Pereira", "Lima", "Carvalho", "Ferreira", "Almeida",
    "Gomes", "Martins", "Rocha", "Ribeiro", "Alves", "Monteiro", "Mendes", "Barros", "Freitas",
    "Barbosa", "Nogueira", "Moreira", "Cardoso", "Teixeira", "Correia",
];

/// Connectives used between surnames ("Ana de Souza")
pub(super) const NAME_PARTICLES: &[&str] = &["de", "da", "dos"];

pub(super) const CITIES: &[&str] = &[
    "Goiânia",
    "Anápolis",
    "Aparecida de Goiânia",
    "Rio Verde",
    "Brasília",
    "São Paulo",
    "Rio de Janeiro",
    "Belo Horizonte",
    "Salvador",
    "Curitiba",
    "Porto Alegre",
    "Recife",
    "Fortaleza",
    "Manaus",
    "Belém",
    "Campinas",
    "Uberlândia",
    "Cuiabá",
    "Campo Grande",
    "Florianópolis",
];

pub(super) const STATES: &[&str] = &[
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

pub(super) const STREET_TYPES: &[&str] = &["Rua", "Avenida", "Alameda", "Travessa", "Praça"];

pub(super) const STREET_NAMES: &[&str] = &[
    "das Acácias",
    "das Flores",
    "Goiás",
    "Anhanguera",
    "Tiradentes",
    "Sete de Setembro",
    "Quinze de Novembro",
    "Dom Pedro II",
    "Santos Dumont",
    "dos Ipês",
    "Marechal Deodoro",
    "Rui Barbosa",
];

pub(super) const ADDRESS_COMPLEMENTS: &[&str] = &["Apto.", "Casa", "Bloco", "Sala", "Lote"];

pub(super) const JOB_TITLES: &[&str] = &[
    "Engenheiro Civil",
    "Arquiteta",
    "Professor",
    "Advogada",
    "Médico",
    "Enfermeira",
    "Contador",
    "Analista de Sistemas",
    "Administradora",
    "Comerciante",
    "Agricultor",
    "Motorista",
    "Farmacêutica",
    "Jornalista",
    "Servidor Público",
];

pub(super) const PROPERTY_REGIMES: &[&str] = &[
    "Comunhão Parcial de Bens",
    "Comunhão Universal de Bens",
    "Separação Total de Bens",
];

pub(super) const OFFICER_ROLES: &[&str] = &["Oficial de Registro", "Escrevente Autorizado"];
