//! Built-in reference tables: conference rosters as of the 2024-25 season,
//! the team alias table, and effective-dated conference history for teams
//! that realigned. A roster file supplied at runtime replaces the
//! conference table; aliases and history always ship with the binary.

/// Conference -> member teams. Spellings match the upstream box-score
/// source, which is why some entries differ from the alias canon (the
/// Big East lists "UConn", the alias table maps it to "Connecticut").
pub(crate) const DEFAULT_CONFERENCES: &[(&str, &[&str])] = &[
    (
        "ACC",
        &[
            "Boston College",
            "California",
            "Clemson",
            "Duke",
            "Florida State",
            "Georgia Tech",
            "Louisville",
            "Miami (FL)",
            "NC State",
            "North Carolina",
            "Notre Dame",
            "Pittsburgh",
            "SMU",
            "Stanford",
            "Syracuse",
            "Virginia",
            "Virginia Tech",
            "Wake Forest",
        ],
    ),
    (
        "Big Ten",
        &[
            "Illinois",
            "Indiana",
            "Iowa",
            "Maryland",
            "Michigan",
            "Michigan State",
            "Minnesota",
            "Nebraska",
            "Northwestern",
            "Ohio State",
            "Oregon",
            "Penn State",
            "Purdue",
            "Rutgers",
            "UCLA",
            "USC",
            "Washington",
            "Wisconsin",
        ],
    ),
    (
        "SEC",
        &[
            "Alabama",
            "Arkansas",
            "Auburn",
            "Florida",
            "Georgia",
            "Kentucky",
            "LSU",
            "Mississippi State",
            "Missouri",
            "Oklahoma",
            "Ole Miss",
            "South Carolina",
            "Tennessee",
            "Texas",
            "Texas A&M",
            "Vanderbilt",
        ],
    ),
    (
        "Big 12",
        &[
            "Arizona",
            "Arizona State",
            "Baylor",
            "BYU",
            "Cincinnati",
            "Colorado",
            "Houston",
            "Iowa State",
            "Kansas",
            "Kansas State",
            "Oklahoma State",
            "TCU",
            "Texas Tech",
            "UCF",
            "Utah",
            "West Virginia",
        ],
    ),
    (
        "Big East",
        &[
            "Butler",
            "UConn",
            "Creighton",
            "DePaul",
            "Georgetown",
            "Marquette",
            "Providence",
            "Seton Hall",
            "St. John's",
            "Villanova",
            "Xavier",
        ],
    ),
    (
        "WCC",
        &[
            "Gonzaga",
            "Loyola Marymount",
            "Oregon State",
            "Pacific",
            "Pepperdine",
            "Portland",
            "Saint Mary's (CA)",
            "San Diego",
            "San Francisco",
            "Santa Clara",
            "Seattle",
            "Washington State",
        ],
    ),
    (
        "American",
        &[
            "Charlotte",
            "East Carolina",
            "Florida Atlantic",
            "Memphis",
            "North Texas",
            "Rice",
            "South Florida",
            "Temple",
            "Tulane",
            "Tulsa",
            "UAB",
            "UTSA",
            "Wichita State",
        ],
    ),
    (
        "Mountain West",
        &[
            "Air Force",
            "Boise State",
            "Colorado State",
            "Fresno State",
            "Grand Canyon",
            "Nevada",
            "New Mexico",
            "San Diego State",
            "San Jose State",
            "UNLV",
            "Utah State",
            "Wyoming",
        ],
    ),
    (
        "Ivy League",
        &[
            "Brown",
            "Columbia",
            "Cornell",
            "Dartmouth",
            "Harvard",
            "Penn",
            "Princeton",
            "Yale",
        ],
    ),
    (
        "Atlantic 10",
        &[
            "Dayton",
            "Davidson",
            "Duquesne",
            "Fordham",
            "George Mason",
            "George Washington",
            "La Salle",
            "Loyola Chicago",
            "Rhode Island",
            "Richmond",
            "Saint Joseph's",
            "Saint Louis",
            "St. Bonaventure",
            "VCU",
        ],
    ),
    (
        "MVC",
        &[
            "Belmont",
            "Bradley",
            "Drake",
            "Evansville",
            "Illinois State",
            "Indiana State",
            "Murray State",
            "Northern Iowa",
            "Southern Illinois",
            "UIC",
            "Valparaiso",
        ],
    ),
    (
        "CAA",
        &[
            "Campbell",
            "Charleston",
            "Drexel",
            "Elon",
            "Hampton",
            "Hofstra",
            "Monmouth",
            "UNCW",
            "Northeastern",
            "North Carolina A&T",
            "Stony Brook",
            "Towson",
            "William & Mary",
        ],
    ),
    (
        "Patriot League",
        &[
            "American",
            "Army",
            "Boston University",
            "Bucknell",
            "Colgate",
            "Holy Cross",
            "Lafayette",
            "Lehigh",
            "Loyola (MD)",
            "Navy",
        ],
    ),
    (
        "WAC",
        &[
            "Abilene Christian",
            "California Baptist",
            "Southern Utah",
            "Tarleton State",
            "Utah Tech",
            "Utah Valley",
            "UT Arlington",
        ],
    ),
    (
        "Big Sky",
        &[
            "Eastern Washington",
            "Idaho",
            "Idaho State",
            "Montana",
            "Montana State",
            "Northern Arizona",
            "Northern Colorado",
            "Portland State",
            "Sacramento State",
            "Weber State",
        ],
    ),
    (
        "Horizon League",
        &[
            "Cleveland State",
            "Detroit Mercy",
            "Green Bay",
            "IU Indianapolis",
            "Milwaukee",
            "Northern Kentucky",
            "Oakland",
            "Purdue Fort Wayne",
            "Robert Morris",
            "Wright State",
            "Youngstown State",
        ],
    ),
    (
        "ASUN",
        &[
            "Austin Peay",
            "Bellarmine",
            "Central Arkansas",
            "Eastern Kentucky",
            "Florida Gulf Coast",
            "Jacksonville",
            "Lipscomb",
            "North Alabama",
            "North Florida",
            "Queens",
            "Stetson",
            "West Georgia",
        ],
    ),
    (
        "NEC",
        &[
            "Central Connecticut",
            "Chicago State",
            "Fairleigh Dickinson",
            "Le Moyne",
            "LIU",
            "Mercyhurst",
            "Merrimack",
            "New Haven",
            "Sacred Heart",
            "St. Francis (PA)",
            "Stonehill",
            "Wagner",
        ],
    ),
    (
        "MAAC",
        &[
            "Canisius",
            "Fairfield",
            "Iona",
            "Manhattan",
            "Marist",
            "Mount St. Mary's",
            "Niagara",
            "Quinnipiac",
            "Rider",
            "Saint Peter's",
            "Siena",
        ],
    ),
    (
        "MEAC",
        &[
            "Coppin State",
            "Delaware State",
            "Howard",
            "Maryland-Eastern Shore",
            "Morgan State",
            "Norfolk State",
            "North Carolina Central",
            "South Carolina State",
        ],
    ),
    (
        "SWAC",
        &[
            "Alabama A&M",
            "Alabama State",
            "Alcorn State",
            "Arkansas-Pine Bluff",
            "Bethune-Cookman",
            "Florida A&M",
            "Grambling State",
            "Jackson State",
            "Mississippi Valley State",
            "Prairie View A&M",
            "Southern",
            "Texas Southern",
        ],
    ),
    (
        "Southland",
        &[
            "East Texas A&M",
            "Houston Christian",
            "Incarnate Word",
            "Lamar",
            "McNeese",
            "New Orleans",
            "Nicholls",
            "Northwestern State",
            "Southeastern Louisiana",
            "Stephen F. Austin",
            "Texas A&M-Corpus Christi",
            "UTRGV",
        ],
    ),
    (
        "OVC",
        &[
            "Eastern Illinois",
            "Little Rock",
            "Lindenwood",
            "Morehead State",
            "SIU Edwardsville",
            "Southeast Missouri State",
            "Southern Indiana",
            "Tennessee State",
            "Tennessee Tech",
            "UT Martin",
            "Western Illinois",
        ],
    ),
    (
        "Big West",
        &[
            "Cal Poly",
            "Cal State Bakersfield",
            "Cal State Fullerton",
            "Cal State Northridge",
            "Hawaii",
            "Long Beach State",
            "UC Davis",
            "UC Irvine",
            "UC Riverside",
            "UC San Diego",
            "UC Santa Barbara",
        ],
    ),
    (
        "Summit League",
        &[
            "Denver",
            "Kansas City",
            "North Dakota",
            "North Dakota State",
            "Omaha",
            "Oral Roberts",
            "South Dakota",
            "South Dakota State",
            "St. Thomas",
        ],
    ),
    (
        "Southern Conference",
        &[
            "Chattanooga",
            "East Tennessee State",
            "Furman",
            "Mercer",
            "Samford",
            "The Citadel",
            "UNC Greensboro",
            "VMI",
            "Western Carolina",
            "Wofford",
        ],
    ),
    (
        "America East",
        &[
            "Albany",
            "Binghamton",
            "Bryant",
            "Maine",
            "New Hampshire",
            "NJIT",
            "UMass Lowell",
            "UMBC",
            "Vermont",
        ],
    ),
    (
        "Conference USA",
        &[
            "Delaware",
            "FIU",
            "Jacksonville State",
            "Kennesaw State",
            "Liberty",
            "Louisiana Tech",
            "Middle Tennessee",
            "Missouri State",
            "New Mexico State",
            "Sam Houston",
            "UTEP",
            "Western Kentucky",
        ],
    ),
    (
        "MAC",
        &[
            "Akron",
            "Ball State",
            "Bowling Green",
            "Buffalo",
            "Central Michigan",
            "Eastern Michigan",
            "Kent State",
            "Miami (OH)",
            "Northern Illinois",
            "Ohio",
            "Toledo",
            "UMass",
            "Western Michigan",
        ],
    ),
    (
        "Sun Belt",
        &[
            "Appalachian State",
            "Arkansas State",
            "Coastal Carolina",
            "Georgia Southern",
            "Georgia State",
            "James Madison",
            "Louisiana",
            "Louisiana-Monroe",
            "Marshall",
            "Old Dominion",
            "South Alabama",
            "Southern Miss",
            "Texas State",
            "Troy",
        ],
    ),
    (
        "Big South",
        &[
            "Charleston Southern",
            "Gardner-Webb",
            "High Point",
            "Longwood",
            "Presbyterian",
            "Radford",
            "UNC Asheville",
            "USC Upstate",
            "Winthrop",
        ],
    ),
];

/// Alternate spelling -> canonical spelling. Single-step: lookups never
/// chase chains. A few pairs are intentionally bidirectional because the
/// sources disagree on which form is canonical (UConn/Connecticut,
/// SMU/Southern Methodist, UCF/Central Florida, UMass/Massachusetts);
/// roster matching tries both directions so either spelling resolves.
pub(crate) const TEAM_ALIASES: &[(&str, &str)] = &[
    // Renamed or transitioned schools
    ("IUPUI", "IU Indianapolis"),
    ("Texas A&M-Commerce", "East Texas A&M"),
    // Common nicknames
    ("Ole Miss", "Mississippi"),
    ("Mizzou", "Missouri"),
    ("Cuse", "Syracuse"),
    ("Nova", "Villanova"),
    ("Zags", "Gonzaga"),
    ("Hoos", "Virginia"),
    ("Heels", "North Carolina"),
    ("Dukies", "Duke"),
    // State school abbreviations
    ("Pitt", "Pittsburgh"),
    ("UNC", "North Carolina"),
    ("NC State", "North Carolina State"),
    ("NCSU", "North Carolina State"),
    ("MSU", "Michigan State"),
    ("LSU", "Louisiana State"),
    ("FSU", "Florida State"),
    ("ASU", "Arizona State"),
    ("WSU", "Washington State"),
    ("KSU", "Kansas State"),
    ("ISU", "Iowa State"),
    ("PSU", "Penn State"),
    ("UVA", "Virginia"),
    ("UGA", "Georgia"),
    ("UK", "Kentucky"),
    ("UT", "Texas"),
    ("OU", "Oklahoma"),
    ("OSU", "Oklahoma State"),
    ("TTU", "Texas Tech"),
    ("TCU", "Texas Christian"),
    ("WVU", "West Virginia"),
    ("Miss State", "Mississippi State"),
    ("Miss St", "Mississippi State"),
    ("Penn St", "Penn State"),
    ("Ohio St", "Ohio State"),
    ("Mich St", "Michigan State"),
    ("Michigan St", "Michigan State"),
    ("Fla St", "Florida State"),
    ("Florida St", "Florida State"),
    ("Oregon St", "Oregon State"),
    ("Wash St", "Washington State"),
    ("Washington St", "Washington State"),
    ("Ariz St", "Arizona State"),
    ("Arizona St", "Arizona State"),
    ("Colo St", "Colorado State"),
    ("Colorado St", "Colorado State"),
    ("Utah St", "Utah State"),
    ("Fresno St", "Fresno State"),
    ("San Jose St", "San Jose State"),
    ("San Diego St", "San Diego State"),
    ("Boise St", "Boise State"),
    ("Iowa St", "Iowa State"),
    ("Kansas St", "Kansas State"),
    ("OK State", "Oklahoma State"),
    ("Okla St", "Oklahoma State"),
    // University-of variations
    ("Southern California", "USC"),
    ("UConn", "Connecticut"),
    ("Connecticut", "UConn"),
    ("UCF", "Central Florida"),
    ("Central Florida", "UCF"),
    ("UMass", "Massachusetts"),
    ("Massachusetts", "UMass"),
    ("URI", "Rhode Island"),
    ("UNH", "New Hampshire"),
    ("UVM", "Vermont"),
    ("UCSB", "UC Santa Barbara"),
    ("UCI", "UC Irvine"),
    ("UCR", "UC Riverside"),
    ("UCSD", "UC San Diego"),
    ("UCD", "UC Davis"),
    ("Cal", "California"),
    ("Berkeley", "California"),
    ("UC Berkeley", "California"),
    ("UTA", "UT Arlington"),
    ("UTM", "UT Martin"),
    ("MTSU", "Middle Tennessee"),
    ("WKU", "Western Kentucky"),
    ("EKU", "Eastern Kentucky"),
    ("NKU", "Northern Kentucky"),
    ("EWU", "Eastern Washington"),
    ("NIU", "Northern Illinois"),
    ("CMU", "Central Michigan"),
    ("EMU", "Eastern Michigan"),
    ("WMU", "Western Michigan"),
    ("BGSU", "Bowling Green"),
    ("BG", "Bowling Green"),
    // Abbreviated names
    ("SMU", "Southern Methodist"),
    ("Southern Methodist", "SMU"),
    ("VCU", "Virginia Commonwealth"),
    ("GW", "George Washington"),
    ("GWU", "George Washington"),
    ("FAU", "Florida Atlantic"),
    ("FIU", "Florida International"),
    ("UNLV", "Nevada-Las Vegas"),
    ("Nevada Las Vegas", "UNLV"),
    ("LMU", "Loyola Marymount"),
    ("Cal Baptist", "California Baptist"),
    ("CBU", "California Baptist"),
    ("GCU", "Grand Canyon"),
    ("SFA", "Stephen F. Austin"),
    ("SFASU", "Stephen F. Austin"),
    ("SHSU", "Sam Houston"),
    ("Sam Houston State", "Sam Houston"),
    ("NMSU", "New Mexico State"),
    ("SDSU", "San Diego State"),
    ("SJSU", "San Jose State"),
    ("CSUF", "Cal State Fullerton"),
    ("CSUN", "Cal State Northridge"),
    ("CSULB", "Long Beach State"),
    ("LBS", "Long Beach State"),
    ("LBSU", "Long Beach State"),
    // Saint / St. variations
    ("Saint Mary's", "Saint Mary's (CA)"),
    ("St. Mary's", "Saint Mary's (CA)"),
    ("St Mary's", "Saint Mary's (CA)"),
    ("Saint Francis (PA)", "St. Francis (PA)"),
    ("Saint Francis (NY)", "St. Francis (NY)"),
    ("Saint John's", "St. John's"),
    ("St. Joseph's", "Saint Joseph's"),
    ("St. Louis", "Saint Louis"),
    ("Saint Bonaventure", "St. Bonaventure"),
    ("St Bonaventure", "St. Bonaventure"),
    ("St. Peter's", "Saint Peter's"),
    // Loyola variations
    ("Loyola (IL)", "Loyola Chicago"),
    ("Loyola Illinois", "Loyola Chicago"),
    ("Loyola-Chicago", "Loyola Chicago"),
    ("Loyola Maryland", "Loyola (MD)"),
    ("Loyola-Maryland", "Loyola (MD)"),
    ("Loyola (LA)", "Loyola New Orleans"),
    ("Loyola-New Orleans", "Loyola New Orleans"),
    // Miami variations
    ("Miami", "Miami (FL)"),
    ("Miami (Florida)", "Miami (FL)"),
    ("Miami Florida", "Miami (FL)"),
    ("Miami Ohio", "Miami (OH)"),
    ("Miami (Ohio)", "Miami (OH)"),
    ("Miami-Ohio", "Miami (OH)"),
    // A&M / Tech variations
    ("TAMU", "Texas A&M"),
    ("A&M", "Texas A&M"),
    ("GT", "Georgia Tech"),
    ("GaTech", "Georgia Tech"),
    ("VT", "Virginia Tech"),
    ("VaTech", "Virginia Tech"),
    ("LA Tech", "Louisiana Tech"),
    ("LATech", "Louisiana Tech"),
    // Regional and directional schools
    ("UNI", "Northern Iowa"),
    ("SEMO", "Southeast Missouri State"),
    ("SIUE", "SIU Edwardsville"),
    ("SIU", "Southern Illinois"),
    ("SIUC", "Southern Illinois"),
    ("Illinois-Chicago", "UIC"),
    ("Maryland-Baltimore County", "UMBC"),
    ("UMKC", "Kansas City"),
    ("Missouri-Kansas City", "Kansas City"),
    ("UNO", "New Orleans"),
    ("UNC Wilmington", "UNCW"),
    ("UNCG", "UNC Greensboro"),
    ("UNCA", "UNC Asheville"),
    // Ivy League
    ("Pennsylvania", "Penn"),
    // Service academies
    ("Army West Point", "Army"),
    ("Navy Midshipmen", "Navy"),
    ("Air Force Falcons", "Air Force"),
    // Historical names
    ("Southwest Missouri State", "Missouri State"),
    ("Middle Tennessee State", "Middle Tennessee"),
    ("Southeast Missouri", "Southeast Missouri State"),
    ("UT-Arlington", "UT Arlington"),
    ("Texas-Arlington", "UT Arlington"),
    ("UT-San Antonio", "UTSA"),
    ("Texas-San Antonio", "UTSA"),
    ("UT-El Paso", "UTEP"),
    ("Texas-El Paso", "UTEP"),
];

/// Team -> (effective YYYYMMDD, conference), oldest first. The latest
/// entry at or before a game date wins; teams without an entry fall back
/// to current membership. Only teams that changed conferences are listed.
pub(crate) const CONFERENCE_HISTORY: &[(&str, &[(u32, &str)])] = &[
    // 2024-25 realignment: Pac-12 dissolution
    ("UCLA", &[(19280101, "Pac-12"), (20240701, "Big Ten")]),
    ("USC", &[(19220101, "Pac-12"), (20240701, "Big Ten")]),
    ("Oregon", &[(19150101, "Pac-12"), (20240701, "Big Ten")]),
    ("Washington", &[(19150101, "Pac-12"), (20240701, "Big Ten")]),
    ("Arizona", &[(19780101, "Pac-12"), (20240701, "Big 12")]),
    ("Arizona State", &[(19780101, "Pac-12"), (20240701, "Big 12")]),
    (
        "Colorado",
        &[
            (19470101, "Big Eight"),
            (19960701, "Big 12"),
            (20110701, "Pac-12"),
            (20240701, "Big 12"),
        ],
    ),
    (
        "Utah",
        &[
            (19990701, "Mountain West"),
            (20110701, "Pac-12"),
            (20240701, "Big 12"),
        ],
    ),
    ("Texas", &[(19960701, "Big 12"), (20240701, "SEC")]),
    ("Oklahoma", &[(19960701, "Big 12"), (20240701, "SEC")]),
    ("California", &[(19150101, "Pac-12"), (20240701, "ACC")]),
    ("Stanford", &[(19150101, "Pac-12"), (20240701, "ACC")]),
    ("SMU", &[(20130701, "AAC"), (20240701, "ACC")]),
    ("Oregon State", &[(19150101, "Pac-12"), (20240701, "WCC")]),
    ("Washington State", &[(19170101, "Pac-12"), (20240701, "WCC")]),
    ("Grand Canyon", &[(20130701, "WAC"), (20240701, "Mountain West")]),
    ("Seattle", &[(20090701, "Independent"), (20240701, "WCC")]),
    // 2023-24 realignment
    ("BYU", &[(20110701, "WCC"), (20230701, "Big 12")]),
    ("Cincinnati", &[(20130701, "AAC"), (20230701, "Big 12")]),
    ("Houston", &[(20130701, "AAC"), (20230701, "Big 12")]),
    ("UCF", &[(20130701, "AAC"), (20230701, "Big 12")]),
    (
        "UConn",
        &[
            (19790701, "Big East"),
            (20130701, "AAC"),
            (20200701, "Big East"),
        ],
    ),
    // 2022-23 realignment
    (
        "Missouri",
        &[
            (19070701, "Big Eight"),
            (19960701, "Big 12"),
            (20120701, "SEC"),
        ],
    ),
    ("Texas A&M", &[(19960701, "Big 12"), (20120701, "SEC")]),
    // ACC expansion
    (
        "Louisville",
        &[
            (19950701, "Conference USA"),
            (20050701, "Big East"),
            (20140701, "ACC"),
        ],
    ),
    ("Syracuse", &[(19790701, "Big East"), (20130701, "ACC")]),
    ("Pittsburgh", &[(19820701, "Big East"), (20130701, "ACC")]),
    ("Notre Dame", &[(19950701, "Big East"), (20130701, "ACC")]),
    // Big Ten expansion
    ("Maryland", &[(19530701, "ACC"), (20140701, "Big Ten")]),
    ("Rutgers", &[(19910701, "Big East"), (20140701, "Big Ten")]),
    (
        "Nebraska",
        &[
            (19070701, "Big Eight"),
            (19960701, "Big 12"),
            (20110701, "Big Ten"),
        ],
    ),
    // Big East reconfiguration (2013)
    ("Creighton", &[(19760701, "MVC"), (20130701, "Big East")]),
    ("Xavier", &[(19950701, "Atlantic 10"), (20130701, "Big East")]),
    (
        "Butler",
        &[
            (19790701, "Horizon League"),
            (20120701, "Atlantic 10"),
            (20130701, "Big East"),
        ],
    ),
    // Atlantic 10 changes
    ("Dayton", &[(19930701, "Great Midwest"), (19950701, "Atlantic 10")]),
    ("VCU", &[(19950701, "CAA"), (20120701, "Atlantic 10")]),
    (
        "Davidson",
        &[(19910701, "Southern Conference"), (20140701, "Atlantic 10")],
    ),
    ("Loyola Chicago", &[(20130701, "MVC"), (20210701, "Atlantic 10")]),
    // MVC changes
    ("Murray State", &[(19480701, "OVC"), (20220701, "MVC")]),
    ("Belmont", &[(20120701, "OVC"), (20220701, "MVC")]),
    // Conference USA / AAC splits
    ("Memphis", &[(19950701, "Conference USA"), (20130701, "AAC")]),
    ("Temple", &[(19820701, "Atlantic 10"), (20130701, "AAC")]),
    ("Tulane", &[(19950701, "Conference USA"), (20140701, "AAC")]),
    (
        "Tulsa",
        &[
            (19960701, "WAC"),
            (20050701, "Conference USA"),
            (20140701, "AAC"),
        ],
    ),
    ("Wichita State", &[(19450701, "MVC"), (20170701, "AAC")]),
    (
        "Florida Atlantic",
        &[(20130701, "Conference USA"), (20230701, "AAC")],
    ),
    // WCC era starts
    ("Gonzaga", &[(19790701, "WCAC"), (19890701, "WCC")]),
    ("Saint Mary's (CA)", &[(19770701, "WCAC"), (19890701, "WCC")]),
    // School renames / division transitions
    (
        "IU Indianapolis",
        &[(19980701, "Mid-Continent"), (20170701, "Horizon League")],
    ),
    ("East Texas A&M", &[(20130701, "Lone Star"), (20220701, "Southland")]),
];
