//! Editorial text shown around the verses: chapter preambles keyed by
//! `"<book>-<chapter>"` and section titles keyed by `"<book>-<chapter>-<verse>"`.

pub(super) const PREAMBLES: &[(&str, &str)] = &[
    (
        "Genesis-1",
        "The book of beginnings opens with the account of creation in six days and the rest of the seventh.",
    ),
    (
        "Exodus-20",
        "At Sinai the Ten Commandments are spoken to the people gathered below the mountain.",
    ),
    (
        "Psalms-23",
        "A psalm of David, among the best known songs of trust in the whole collection.",
    ),
    (
        "Isaiah-53",
        "The fourth song of the suffering servant, read by the early church as a portrait of the Messiah.",
    ),
    (
        "Matthew-5",
        "The Sermon on the Mount begins here and runs through the end of chapter seven.",
    ),
    (
        "John-1",
        "John opens his gospel not with a birth narrative but with the eternal Word.",
    ),
    (
        "Romans-8",
        "The high point of Paul's argument: life in the Spirit and the assurance of God's love.",
    ),
    (
        "1 Corinthians-13",
        "Paul's meditation on charity, placed between his teaching on spiritual gifts.",
    ),
    (
        "Revelation-21",
        "The closing vision of a new heaven, a new earth, and the holy city descending.",
    ),
];

pub(super) const SECTION_TITLES: &[(&str, &str)] = &[
    ("Matthew-1-1", "The Genealogy of Jesus Christ"),
    ("Matthew-1-18", "The Birth of Jesus Christ"),
    ("Matthew-3-1", "The Preaching of John the Baptist"),
    ("Matthew-3-13", "The Baptism of Jesus"),
    ("Matthew-4-1", "The Temptation of Jesus"),
    ("Matthew-4-12", "Jesus Begins His Ministry"),
    ("Matthew-4-18", "The Calling of the First Disciples"),
    ("Matthew-8-1", "The Cleansing of a Leper"),
    ("Matthew-8-23", "Jesus Calms the Storm"),
    ("Matthew-9-1", "The Healing of a Paralytic"),
    ("Matthew-9-9", "The Calling of Matthew"),
    ("Matthew-10-1", "The Mission of the Twelve"),
    ("Matthew-13-1", "The Parable of the Sower"),
    ("Matthew-13-24", "The Parable of the Weeds"),
    ("Matthew-13-31", "The Parable of the Mustard Seed"),
    ("Matthew-16-13", "Peter's Confession of Christ"),
    ("Mark-1-1", "John the Baptist"),
    ("Mark-1-9", "The Baptism and Temptation of Jesus"),
    ("Mark-1-16", "The Calling of the First Disciples"),
    ("Mark-4-1", "The Parable of the Sower"),
    ("Mark-5-1", "The Gerasene Demoniac"),
    ("Mark-6-14", "The Death of John the Baptist"),
    ("Mark-8-27", "Peter's Confession of Christ"),
    ("Luke-1-5", "The Birth of John the Baptist Foretold"),
    ("Luke-1-26", "The Birth of Jesus Foretold"),
    ("Luke-2-1", "The Birth of Jesus"),
    ("Luke-2-41", "Jesus Among the Teachers"),
    ("Luke-4-1", "The Temptation of Jesus"),
    ("Luke-10-1", "The Mission of the Seventy"),
    ("Luke-10-25", "The Good Samaritan"),
    ("Luke-15-1", "The Parable of the Lost Sheep"),
    ("Luke-15-11", "The Parable of the Prodigal Son"),
    ("Luke-22-7", "The Last Supper"),
    ("John-1-1", "The Word Became Flesh"),
    ("John-3-1", "Jesus and Nicodemus"),
    ("John-4-1", "The Samaritan Woman"),
    ("John-10-1", "The Good Shepherd"),
    ("John-11-1", "The Resurrection of Lazarus"),
    ("John-13-1", "Jesus Washes the Disciples' Feet"),
    ("John-17-1", "The High Priestly Prayer"),
    ("1 Corinthians-1-10", "Divisions in the Church"),
    ("1 Corinthians-11-17", "The Lord's Supper"),
    ("1 Corinthians-12-1", "Spiritual Gifts"),
    ("Ephesians-1-3", "Spiritual Blessings"),
    ("Ephesians-4-1", "Unity in the Church"),
    ("Ephesians-6-10", "The Armor of God"),
];
