//! Static wellbeing tip catalog

/// The fixed list of wellbeing tips shown by the `tips` command
pub const TIPS: &[&str] = &[
    "La mayor riqueza es la salud mental. – Dalai Lama",
    "Acepta tus emociones sin juzgarte.",
    "Un mal día no define quién eres.",
    "Haz una cosa a la vez. Está bien ir lento.",
    "Está bien pedir ayuda. No tienes que enfrentarlo todo solo.",
    "Cada día es una oportunidad para crecer",
    "La paz comienza con una sonrisa",
    "Respira profundo, todo estará bien",
    "Eres más fuerte de lo que piensas",
    "Cultiva pensamientos positivos",
];
