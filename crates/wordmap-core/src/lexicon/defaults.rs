//! Built-in word lists.
//!
//! These are the compiled-in defaults; a configuration overlay can extend
//! them but never shrink them. All entries are lowercase.

/// Stop words and platform noise excluded unconditionally.
pub(crate) const BANNED: &[&str] = &[
    // English stop words
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has",
    "he", "in", "is", "it", "its", "of", "on", "that", "the", "to", "was",
    "will", "with", "i", "am", "my", "we", "this", "have", "been", "would",
    "using", "use", "also", "can", "may", "or", "but", "if", "so", "than",
    "do", "does", "did", "which", "these", "those", "such", "into",
    "through", "during", "before", "after", "again", "above", "below",
    "between", "under", "over", "both", "each", "few", "more", "most",
    "other", "some", "there", "their", "them", "then", "when", "where",
    "who", "why", "how", "all", "any", "being", "could", "having", "her",
    "here", "him", "his", "me", "not", "now", "only", "our", "out", "own",
    "same", "should", "theirs", "themselves", "they", "up", "very", "what",
    "while", "whom", "your", "yours", "yourself", "yourselves", "about",
    "via", "want", "like", "need", "get", "work", "working", "used", "try",
    "trying", "test", "testing", "currently", "able", "plan", "planning",
    "etc", "just", "really", "please", "thanks", "thank", "hi", "hello",
    "hey", "one", "two", "three",
    // Platform noise
    "morphocloud", "university", "instance", "create", "created",
    "creating", "participant", "workshop", "github", "issue", "well",
    "attending", "orcid",
];

/// Geographic terms excluded unconditionally.
pub(crate) const LOCATIONS: &[&str] = &[
    "usa", "america", "american", "states", "united", "california",
    "texas", "florida", "new", "york", "washington", "oregon", "colorado",
    "arizona", "utah", "nevada", "illinois", "ohio", "michigan",
    "pennsylvania", "massachusetts", "virginia", "georgia", "north",
    "carolina", "south", "tennessee", "kentucky", "alabama", "louisiana",
    "mississippi", "arkansas", "oklahoma", "kansas", "nebraska", "iowa",
    "missouri", "wisconsin", "minnesota", "indiana", "maryland",
    "delaware", "connecticut", "rhode", "island", "vermont", "hampshire",
    "maine", "west", "seattle", "portland", "denver", "phoenix",
    "chicago", "boston", "atlanta", "houston", "dallas", "austin",
    "miami", "philadelphia", "detroit", "baltimore", "japan", "japanese",
    "tokyo", "kyoto", "osaka", "china", "chinese", "beijing", "shanghai",
    "canada", "canadian", "toronto", "vancouver", "montreal", "ottawa",
    "england", "london", "britain", "british", "uk", "scotland", "wales",
    "ireland", "france", "french", "paris", "germany", "german", "berlin",
    "spain", "spanish", "madrid", "italy", "italian", "rome",
    "netherlands", "dutch", "amsterdam", "belgium", "brussels",
    "switzerland", "swiss", "sweden", "stockholm", "norway", "denmark",
    "finland", "austria", "poland", "portugal", "greece", "russia",
    "australia", "australian", "sydney", "melbourne", "zealand",
    "auckland", "india", "indian", "delhi", "mumbai", "brazil",
    "brazilian", "mexico", "mexican", "argentina", "chile", "peru",
    "colombia", "africa", "african", "kenya", "egypt", "europe",
    "european", "asia", "asian", "kyushu", "louisville",
];

/// Common personal names excluded unconditionally.
pub(crate) const NAMES: &[&str] = &[
    "john", "mary", "michael", "sarah", "david", "james", "robert",
    "jennifer", "william", "linda", "richard", "patricia", "charles",
    "barbara", "joseph", "elizabeth", "thomas", "susan", "christopher",
    "jessica", "daniel", "karen", "matthew", "nancy", "anthony", "lisa",
    "mark", "betty", "donald", "margaret", "steven", "sandra", "paul",
    "ashley", "andrew", "kimberly", "joshua", "emily", "kenneth", "donna",
    "kevin", "michelle", "brian", "carol", "george", "amanda", "edward",
    "melissa", "ronald", "deborah", "timothy", "stephanie", "jason",
    "rebecca", "jeffrey", "sharon", "ryan", "laura", "jacob", "cynthia",
    "gary", "kathleen", "nicholas", "amy", "eric", "shirley", "jonathan",
    "angela", "stephen", "helen", "larry", "anna", "justin", "brenda",
    "scott", "pamela", "brandon", "nicole", "benjamin", "emma", "samuel",
    "samantha", "raymond", "katherine", "patrick", "christine",
    "alexander", "debra", "jack", "rachel", "dennis", "catherine",
    "jerry", "carolyn", "tyler", "janet", "aaron", "ruth", "jose",
    "maria", "adam", "heather", "henry", "diane", "nathan", "virginia",
    "douglas", "julie", "zachary", "joyce", "peter", "victoria", "kyle",
    "olivia", "walter", "kelly", "ethan", "christina", "jeremy", "lauren",
    "harold", "joan", "keith", "evelyn", "christian", "judith", "roger",
    "megan", "noah", "cheryl", "gerald", "andrea", "carl", "hannah",
    "terry", "jacqueline", "sean", "martha", "austin", "gloria", "arthur",
    "teresa", "lawrence", "ann", "jesse", "sara", "dylan", "madison",
    "bryan", "frances", "joe", "kathryn", "jordan", "janice", "billy",
    "jean", "bruce", "abigail", "albert", "sophia", "willie", "isabella",
    "gabriel", "charlotte", "logan", "amelia", "alan", "mia", "juan",
    "harper", "wayne", "roy", "ella", "ralph", "scarlett", "randy",
    "grace", "eugene", "chloe", "vincent", "lily", "russell", "ellie",
    "elijah", "lucy", "louis", "addison", "bobby", "natalie", "philip",
    "lillian", "johnny", "leah", "karly", "cohen", "murat", "maga",
    "luke", "rose", "yuto", "sano", "lee", "annika", "dawley",
];

/// Variant spelling → canonical keyword.
pub(crate) const UNIFICATION: &[(&str, &str)] = &[
    ("segment", "segmentation"),
    ("segments", "segmentation"),
    ("segmenting", "segmentation"),
    ("morphometric", "morphometrics"),
];
