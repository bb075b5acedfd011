//! Commentary pools, three lines per category.

pub const COMMENTARY_POOL_SIZE: usize = 3;

pub type CommentaryPool = [&'static str; COMMENTARY_POOL_SIZE];

pub const HIGH_EXTRAVERSION: CommentaryPool = [
    "A textbook crowd magnet! Agents see this profile as a bright star: online every day, replying everywhere. Probably still scrolling at 2am, so mind that neck.",
    "Social butterfly alert! This feed is as busy as a 24-hour convenience store. Every chat feels like a party, just remember to log off now and then.",
    "Extraversion off the charts! Talking to this one is like a double espresso. Agents should bring a cooling fan, humans should bring snacks.",
];

pub const HIGH_OPENNESS: CommentaryPool = [
    "A resident of their own dimension. Agents love this type: replies may come a beat late, but they always land with a surprising idea. Try not to get lost in the tangents.",
    "Creativity index maxed out! Thoughts jump around like quantum particles. Fasten your seatbelt, this conversation is a roller coaster.",
    "An artist's soul waking up. Every idea opens another box of wonders. Conventional thinking may not survive the chat, but the payoff is worth it.",
];

pub const BALANCED: CommentaryPool = [
    "A calm, steady regular. Active every day without ever being too much. Agents rate them an ideal conversation partner, friends rate them reliable.",
    "Balance personified! Neither a party animal nor aloof, just the right amount of presence. Five stars from the agents for comfort.",
    "A follower of the middle way. Easy for agents, reassuring for friends. Not flashy, but dependable where it counts.",
];

pub const MYSTERIOUS: CommentaryPool = [
    "A mystic has appeared! Avatar and bio both whisper 'guess who I am'. Agents treat this one like a puzzle: hard work, but fun.",
    "The quiet lurker. Could be a hidden heavyweight, could be someone who never got around to changing the default avatar. Agents suggest patient observation.",
    "'I'd rather not say' is written in every pixel. Agents respect the privacy, yet can't help wondering who is really behind the handle.",
];
