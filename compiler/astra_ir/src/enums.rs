//! Domain vocabularies of the content language.
//!
//! The enums here cover a representative slice of the game's vocabulary.
//! Each is a [`Keyword`](crate::Keyword) so the lexer can build a symbol
//! table from it without listing the words a second time.

use std::fmt;

keyword_enum! {
    /// Planet surface type.
    pub enum PlanetType {
        Swamp = ("swamp", "PT_SWAMP"),
        Toxic = ("toxic", "PT_TOXIC"),
        Inferno = ("inferno", "PT_INFERNO"),
        Radiated = ("radiated", "PT_RADIATED"),
        Barren = ("barren", "PT_BARREN"),
        Tundra = ("tundra", "PT_TUNDRA"),
        Desert = ("desert", "PT_DESERT"),
        Terran = ("terran", "PT_TERRAN"),
        Ocean = ("ocean", "PT_OCEAN"),
        Asteroids = ("asteroids", "PT_ASTEROIDS"),
        GasGiant = ("gasgiant", "PT_GASGIANT"),
    }
}

keyword_enum! {
    /// Planet size class. Asteroid belts and gas giants are sizes too.
    pub enum PlanetSize {
        Tiny = ("tiny", "SZ_TINY"),
        Small = ("small", "SZ_SMALL"),
        Medium = ("medium", "SZ_MEDIUM"),
        Large = ("large", "SZ_LARGE"),
        Huge = ("huge", "SZ_HUGE"),
        Asteroids = ("asteroids", "SZ_ASTEROIDS"),
        GasGiant = ("gasgiant", "SZ_GASGIANT"),
    }
}

keyword_enum! {
    /// Habitability of a planet for a species.
    pub enum PlanetEnvironment {
        Uninhabitable = ("uninhabitable", "PE_UNINHABITABLE"),
        Hostile = ("hostile", "PE_HOSTILE"),
        Poor = ("poor", "PE_POOR"),
        Adequate = ("adequate", "PE_ADEQUATE"),
        Good = ("good", "PE_GOOD"),
    }
}

keyword_enum! {
    pub enum StarType {
        Blue = ("blue", "STAR_BLUE"),
        White = ("white", "STAR_WHITE"),
        Yellow = ("yellow", "STAR_YELLOW"),
        Orange = ("orange", "STAR_ORANGE"),
        Red = ("red", "STAR_RED"),
        Neutron = ("neutron", "STAR_NEUTRON"),
        BlackHole = ("blackhole", "STAR_BLACK"),
        NoStar = ("nostar", "STAR_NONE"),
    }
}

keyword_enum! {
    /// Kind of universe object a condition candidate can be.
    pub enum UniverseObjectType {
        Building = ("building", "OBJ_BUILDING"),
        Ship = ("ship", "OBJ_SHIP"),
        Fleet = ("fleet", "OBJ_FLEET"),
        Planet = ("planet", "OBJ_PLANET"),
        PopCenter = ("populationcenter", "OBJ_POP_CENTER"),
        ProdCenter = ("productioncenter", "OBJ_PROD_CENTER"),
        System = ("system", "OBJ_SYSTEM"),
    }
}

keyword_enum! {
    /// Relationship between an object's owner and an empire.
    pub enum EmpireAffiliationType {
        TheEmpire = ("theempire", "AFFIL_SELF"),
        EnemyOf = ("enemyof", "AFFIL_ENEMY"),
        AllyOf = ("allyof", "AFFIL_ALLY"),
        AnyEmpire = ("anyempire", "AFFIL_ANY"),
        None = ("none", "AFFIL_NONE"),
    }
}

impl EmpireAffiliationType {
    /// Whether this affiliation is relative to a specific empire.
    pub fn requires_empire(self) -> bool {
        matches!(
            self,
            EmpireAffiliationType::TheEmpire
                | EmpireAffiliationType::EnemyOf
                | EmpireAffiliationType::AllyOf
        )
    }
}

keyword_enum! {
    /// Things a tech can unlock.
    pub enum UnlockableItemType {
        Building = ("building", "UIT_BUILDING"),
        ShipPart = ("shippart", "UIT_SHIP_PART"),
        ShipHull = ("shiphull", "UIT_SHIP_HULL"),
        ShipDesign = ("shipdesign", "UIT_SHIP_DESIGN"),
        Tech = ("tech", "UIT_TECH"),
    }
}

keyword_enum! {
    /// Empire-level stockpiled resources.
    pub enum ResourceType {
        Food = ("food", "RE_FOOD"),
        Mineral = ("mineral", "RE_MINERALS"),
        Industry = ("industry", "RE_INDUSTRY"),
        Research = ("research", "RE_RESEARCH"),
        Trade = ("trade", "RE_TRADE"),
    }
}

impl ResourceType {
    /// Condition keyword comparing the candidate owner's stockpile.
    pub fn owner_stockpile_keyword(self) -> &'static str {
        match self {
            ResourceType::Food => "ownerfoodstockpile",
            ResourceType::Mineral => "ownermineralstockpile",
            ResourceType::Industry => "ownerindustrystockpile",
            ResourceType::Research => "ownerresearchstockpile",
            ResourceType::Trade => "ownertradestockpile",
        }
    }

    /// Effect keyword setting the target owner's stockpile.
    pub fn set_stockpile_keyword(self) -> &'static str {
        match self {
            ResourceType::Food => "setempirefoodstockpile",
            ResourceType::Mineral => "setempiremineralstockpile",
            ResourceType::Industry => "setempireindustrystockpile",
            ResourceType::Research => "setempireresearchstockpile",
            ResourceType::Trade => "setempiretradestockpile",
        }
    }
}

keyword_enum! {
    /// Per-object meters. Each meter name doubles as a `double` property.
    pub enum MeterType {
        Population = ("population", "METER_POPULATION"),
        TargetPopulation = ("targetpopulation", "METER_TARGET_POPULATION"),
        Health = ("health", "METER_HEALTH"),
        TargetHealth = ("targethealth", "METER_TARGET_HEALTH"),
        Farming = ("farming", "METER_FARMING"),
        TargetFarming = ("targetfarming", "METER_TARGET_FARMING"),
        Industry = ("industry", "METER_INDUSTRY"),
        TargetIndustry = ("targetindustry", "METER_TARGET_INDUSTRY"),
        Research = ("research", "METER_RESEARCH"),
        TargetResearch = ("targetresearch", "METER_TARGET_RESEARCH"),
        Trade = ("trade", "METER_TRADE"),
        TargetTrade = ("targettrade", "METER_TARGET_TRADE"),
        Mining = ("mining", "METER_MINING"),
        TargetMining = ("targetmining", "METER_TARGET_MINING"),
        Construction = ("construction", "METER_CONSTRUCTION"),
        TargetConstruction = ("targetconstruction", "METER_TARGET_CONSTRUCTION"),
        MaxFuel = ("maxfuel", "METER_MAX_FUEL"),
        Fuel = ("fuel", "METER_FUEL"),
        MaxShield = ("maxshield", "METER_MAX_SHIELD"),
        Shield = ("shield", "METER_SHIELD"),
        MaxStructure = ("maxstructure", "METER_MAX_STRUCTURE"),
        Structure = ("structure", "METER_STRUCTURE"),
        MaxDefense = ("maxdefense", "METER_MAX_DEFENSE"),
        Defense = ("defense", "METER_DEFENSE"),
        MaxTroops = ("maxtroops", "METER_MAX_TROOPS"),
        Troops = ("troops", "METER_TROOPS"),
        Detection = ("detection", "METER_DETECTION"),
        Stealth = ("stealth", "METER_STEALTH"),
        Supply = ("supply", "METER_SUPPLY"),
        Happiness = ("happiness", "METER_HAPPINESS"),
        TargetHappiness = ("targethappiness", "METER_TARGET_HAPPINESS"),
    }
}

keyword_enum! {
    /// Aggregation applied by a statistic over the objects matching a condition.
    pub enum StatisticType {
        Count = ("number", "COUNT"),
        Sum = ("sum", "SUM"),
        Mean = ("mean", "MEAN"),
        Rms = ("rms", "RMS"),
        Mode = ("mode", "MODE"),
        Max = ("max", "MAX"),
        Min = ("min", "MIN"),
        Spread = ("spread", "SPREAD"),
        StDev = ("stdev", "STDEV"),
        Product = ("product", "PRODUCT"),
    }
}

keyword_enum! {
    /// Object a variable reference starts from.
    ///
    /// Non-object variables (`currentturn`) have no prefix word and are
    /// represented by [`ReferenceType::NonObject`].
    pub enum ReferenceType {
        Source = ("source", "SOURCE_REFERENCE"),
        EffectTarget = ("target", "EFFECT_TARGET_REFERENCE"),
        ConditionLocalCandidate = ("localcandidate", "CONDITION_LOCAL_CANDIDATE_REFERENCE"),
        ConditionRootCandidate = ("rootcandidate", "CONDITION_ROOT_CANDIDATE_REFERENCE"),
        NonObject = ("", "NON_OBJECT_REFERENCE"),
    }
}

keyword_enum! {
    /// Container object a property path may hop through.
    pub enum ContainerType {
        Planet = ("planet", "PLANET"),
        System = ("system", "SYSTEM"),
        Fleet = ("fleet", "FLEET"),
    }
}

/// How `*numberof` conditions order candidates before picking.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SortingMethod {
    Maximum,
    Minimum,
    Mode,
    Random,
}

impl SortingMethod {
    /// The condition keyword selecting this sorting method.
    pub fn condition_keyword(self) -> &'static str {
        match self {
            SortingMethod::Maximum => "maximumnumberof",
            SortingMethod::Minimum => "minimumnumberof",
            SortingMethod::Mode => "modenumberof",
            SortingMethod::Random => "numberof",
        }
    }
}

/// Arithmetic operator of a value expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpType {
    Negate,
    Times,
    Divides,
    Plus,
    Minus,
}

impl OpType {
    pub fn symbol(self) -> &'static str {
        match self {
            OpType::Negate | OpType::Minus => "-",
            OpType::Times => "*",
            OpType::Divides => "/",
            OpType::Plus => "+",
        }
    }

    pub fn is_unary(self) -> bool {
        self == OpType::Negate
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
