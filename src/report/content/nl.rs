//! Dutch copy.

use super::Entry;
use super::Topic::*;

pub(super) static ENTRIES: &[Entry] = &[
    // ========================================================================
    // HEADINGS
    // ========================================================================
    Entry::new(Heading, "cover", "Gepersonaliseerd wijnrapport"),
    Entry::new(Heading, "introduction", "Inleiding"),
    Entry::new(Heading, "relationship", "Uw relatie met wijn en erfgoed"),
    Entry::new(Heading, "diversification", "Wijn als middel tot diversificatie"),
    Entry::new(Heading, "heritage", "Wijn bewaren en waarderen als erfgoed"),
    Entry::new(Heading, "risk", "Uw risicobereidheid"),
    Entry::new(Heading, "transmission", "Wijn als instrument voor overdracht"),
    Entry::new(Heading, "reserve", "De wettelijke reserve en het beschikbare deel"),
    Entry::new(Heading, "matrimonial", "Het huwelijksstelsel"),
    Entry::new(Heading, "company", "Alternatieve optimalisatiemethoden"),
    Entry::new(Heading, "donation", "De schenking: met betekenis overdragen"),
    Entry::new(Heading, "conclusion", "Ter afsluiting"),
    Entry::new(Heading, "annex", "BIJLAGE"),

    // ========================================================================
    // INTRODUCTION
    // ========================================================================
    Entry::new(
        Introduction,
        "text",
        "Bij GrandcruX geloven wij dat elke wijnliefhebber zijn eigen voorkeuren, \
         overtuigingen en manier heeft om het plezier en de waarde van een fles te \
         benaderen. Voor elke aankoop of investering is het essentieel om zich goed te \
         informeren, de uitdagingen en kansen van deze unieke wereld te begrijpen.\n\nDit \
         document is niet bedoeld als financieel of juridisch advies. Het is bovenal een \
         persoonlijke voorstelling die u wil informeren en inspireren, zodat uw passie voor \
         wijn een doordachte en duurzame benadering wordt.",
    ),

    // ========================================================================
    // PROFILE (KNOWLEDGE / RELATION)
    // ========================================================================
    Entry::new(
        ProfileSummary,
        "text",
        "We hebben genoteerd dat u {knowledge} bent en dat uw belangrijkste relatie met wijn \
         gericht is op {relation}.",
    ),
    Entry::new(
        Knowledge,
        "debutant",
        "Uw interesse in wijn vormt een uitstekend vertrekpunt. De wijnwereld is rijk en \
         boeiend: het leren onderscheiden van regio’s, jaargangen en stijlen is een \
         verrijkende ervaring die men kan beleven via proeverijen, lectuur of bezoeken aan \
         wijnhuizen.",
    ),
    Entry::new(
        Knowledge,
        "amateur",
        "Uw profiel als goed geïnformeerde wijnliefhebber toont een sterke nieuwsgierigheid. \
         Door uw kennis van producenten, terroirs en jaargangen te verdiepen, kunt u uw \
         keuzes verfijnen en het plezier en de culturele dimensie van uw kelder versterken.",
    ),
    Entry::new(
        Knowledge,
        "connaisseur",
        "Uw profiel als kenner of verzamelaar weerspiegelt een deskundige benadering van \
         wijn. U hecht waarschijnlijk belang aan herkomst, bewaring en zeldzaamheid — \
         essentiële elementen voor het behoud van de culturele en potentiële waarde van uw \
         flessen op lange termijn.",
    ),
    Entry::new(
        Knowledge,
        "professionnel",
        "Uw profiel als wijnprofessional impliceert een grondig begrip van de markt. Uw \
         ervaring laat u toe wijn te benaderen als zowel een economisch, zintuiglijk als \
         cultureel universum. Dit document wil die expertise aanvullen met een patrimoniale \
         invalshoek.",
    ),
    Entry::new(
        Knowledge,
        "autre",
        "Uw relatie tot wijn getuigt van een oprechte belangstelling voor deze wereld van \
         passie en overdracht. Elke benadering van wijn is uniek, of ze nu smaakgericht, \
         cultureel of patrimoniaal is.",
    ),
    Entry::new(
        Relation,
        "consommation",
        "Wijn is bovenal een product van plezier en gezelligheid. Het waarderen ervan in een \
         persoonlijke of familiale context maakt deel uit van zijn culturele essentie. Het \
         kiezen, proeven en bewaren van wijn schept een levendige band met het erfgoed en de \
         tradities van de wijnbouw.",
    ),
    Entry::new(
        Relation,
        "investissement",
        "U lijkt wijn te beschouwen als een vorm van investering. Het is echter belangrijk \
         te onthouden dat wijn geen financieel product is, maar een tastbaar goed waarvan de \
         waarde afhangt van vele factoren: jaargang, bewaring, zeldzaamheid, reputatie van \
         het domein en marktomstandigheden. De hier verstrekte informatie is algemeen en \
         vormt op geen enkele manier beleggingsadvies.",
    ),
    Entry::new(
        Relation,
        "les_deux",
        "U combineert plezier en een patrimoniale benadering in uw relatie tot wijn. Dat is \
         een evenwichtige visie, op voorwaarde dat men niet vergeet dat wijn in de eerste \
         plaats een product van passie blijft. Elke financiële overweging moet met \
         voorzichtigheid worden bekeken, rekening houdend met markt- en \
         bewaaromstandigheden. De informatie in dit document is louter informatief en vormt \
         geen beleggingsadvies.",
    ),
    Entry::new(
        Relation,
        "autre",
        "Uw band met wijn weerspiegelt een persoonlijke en oprechte benadering, geworteld in \
         ontdekking en plezier. Elke fles vertegenwoordigt een unieke ervaring en een levend \
         stuk cultureel erfgoed.",
    ),

    // ========================================================================
    // REGION PREFERENCE
    // ========================================================================
    Entry::new(
        RegionIntro,
        "stated",
        "U hebt een voorkeur aangegeven voor de volgende wijnregio: {region}.",
    ),
    Entry::new(
        RegionIntro,
        "autre",
        "U hebt aangegeven geen specifieke voorkeur te hebben voor een wijnregio. Dit biedt \
         een mooie gelegenheid om verschillende horizonten te verkennen en persoonlijk \
         advies te ontvangen volgens uw smaak en doelstellingen.",
    ),
    Entry::new(
        Region,
        "bordeaux",
        "De Bordeauxstreek is een wereldwijde referentie, bekend om haar geclassificeerde \
         wijnen en haar balans tussen kracht en elegantie. Het is een ideale regio om het \
         begrip terroir en de lange levensduur van wijn te begrijpen.\n\nStel uzelf de \
         vraag: geeft u de voorkeur aan de linkeroever (Cabernet Sauvignon, Médoc) of de \
         rechteroever (Merlot, Saint-Émilion)?\n\nEnkele iconen: Château Margaux, Lafite \
         Rothschild, Pétrus, Cheval Blanc.",
    ),
    Entry::new(
        Region,
        "bourgogne",
        "Bourgogne verleidt door haar verfijning en complexiteit. Elke wijngaard vertelt er \
         zijn eigen verhaal, met Pinot Noir en Chardonnay als hoofdrolspelers.\n\nStel uzelf \
         de vraag: houdt u van gestructureerde rode wijnen (Côte de Nuits) of prestigieuze \
         witte (Côte de Beaune)?\n\nEnkele referenties: Romanée-Conti, Meursault, \
         Puligny-Montrachet, Chambertin.",
    ),
    Entry::new(
        Region,
        "vallee_du_rhone",
        "De Rhônevallei biedt genereuze, zonnige en krachtige wijnen. Van het noorden \
         (Côte-Rôtie, Hermitage) tot het zuiden (Châteauneuf-du-Pape) is de diversiteit \
         indrukwekkend.\n\nStel uzelf de vraag: verkiest u de kracht van Syrah of de \
         kruidige rondheid van Grenache en Mourvèdre?\n\nBekende domeinen: E. Guigal, \
         Chapoutier, Château de Beaucastel.",
    ),
    Entry::new(
        Region,
        "loire",
        "De Loire staat voor frisheid en diversiteit: rood, wit, rosé en mousserend. Ideaal \
         voor wie houdt van levendige, evenwichtige wijnen.\n\nStel uzelf de vraag: \
         Sauvignon (Sancerre, Pouilly-Fumé) of Chenin (Vouvray, Anjou)?\n\nAanbevolen \
         producenten: Didier Dagueneau, Huet, Domaine des Roches Neuves.",
    ),
    Entry::new(
        Region,
        "champagne",
        "Champagne verenigt prestige en traditie. Achter de bubbels schuilt een eeuwenoud \
         vakmanschap.\n\nStel uzelf de vraag: verkiest u de grote huizen (Dom Pérignon, \
         Bollinger) of onafhankelijke wijnmakers (Jacques Selosse, Egly-Ouriet)?",
    ),
    Entry::new(
        Region,
        "alsace",
        "De Elzas betovert met haar aromatische precisie. Riesling, Gewurztraminer, Pinot \
         Gris – elk druivenras drukt zijn eigen karakter uit.\n\nStel uzelf de vraag: houdt \
         u van droge, frisse wijnen of eerder van rijke en exotische \
         stijlen?\n\nReferenties: Trimbach, Zind-Humbrecht, Weinbach.",
    ),
    Entry::new(
        Region,
        "provence",
        "De Provence roept de sfeer van het Zuiden en gezelligheid op. Naast rosé produceert \
         men er ook steeds vaker nobele rode en witte wijnen.\n\nStel uzelf de vraag: zoekt \
         u een zomerwijn of een gastronomische wijn?\n\nDomeinen: Domaine Tempier, Château \
         d’Esclans, Minuty, Ott.",
    ),
    Entry::new(
        Region,
        "italie",
        "Italië is een wijncontinent op zich, vol diversiteit en karakter. Van Piemonte \
         (Barolo, Barbaresco) tot Toscane (Brunello, Chianti, Super Tuscans) is de variatie \
         enorm.\n\nStel uzelf de vraag: krachtig en tanninerijk of elegant en \
         bloemig?\n\nEnkele iconen: Gaja, Antinori, Sassicaia, Ornellaia.",
    ),
    Entry::new(
        Region,
        "espagne",
        "Spanje combineert traditie met vernieuwing. Van Rioja tot Ribera del Duero brengt \
         de Tempranillo kracht en fluweelzachtheid samen.\n\nStel uzelf de vraag: houdt u \
         van klassieke houtgerijpte wijnen of moderne fruitige stijlen?\n\nBekende namen: \
         Vega Sicilia, Alvaro Palacios, La Rioja Alta.",
    ),
    Entry::new(
        Region,
        "portugal",
        "Portugal charmeert door zijn authenticiteit. Naast de beroemde portwijnen biedt het \
         Douro- en Alentejo-gebied uitstekende rode wijnen.\n\nStel uzelf de vraag: houdt u \
         van versterkte wijnen of moderne stille wijnen?\n\nAanbevolen producenten: \
         Niepoort, Quinta do Noval, Esporão.",
    ),
    Entry::new(
        Region,
        "nouveau_monde",
        "De Nieuwe Wereld staat voor moderne expressie en vrijheid: Chili, Argentinië, \
         Australië, Californië, Nieuw-Zeeland.\n\nStel uzelf de vraag: verkiest u kracht of \
         fruitige frisheid?\n\nReferenties: Penfolds, Catena Zapata, Opus One.",
    ),
    Entry::new(
        Region,
        "autre",
        "Elke wijnregio ter wereld biedt haar eigen rijkdommen en verrassingen.\n\nEr \
         bestaan talloze boeiende mogelijkheden, afhankelijk van uw smaak en \
         doelstellingen.\n\nAarzel niet om contact op te nemen met een GrandcruX-adviseur om \
         samen de beste opties te ontdekken.",
    ),

    // ========================================================================
    // BUDGET AND DIVERSIFICATION
    // ========================================================================
    Entry::new(
        Budget,
        "moins_500",
        "We merken op dat u een jaarlijks wijnbudget van minder dan EUR500 voorziet. Dit \
         wijst op een nuchtere benadering die draait om eenvoudig genot en ontdekking.",
    ),
    Entry::new(
        Budget,
        "500_2000",
        "We merken op dat u een jaarlijks wijnbudget tussen EUR500 en EUR2.000 voorziet. Een \
         mooi evenwicht tussen plezier en nieuwsgierigheid, waarmee u interessante wijnen \
         kunt ontdekken binnen een beheersbaar budget.",
    ),
    Entry::new(
        Budget,
        "2000_10000",
        "We merken op dat u een jaarlijks wijnbudget tussen EUR2.000 en EUR10.000 voorziet. \
         Dit toont een oprechte passie en betrokkenheid bij wijn, waarbij genot en \
         waardebehoud samengaan.",
    ),
    Entry::new(
        Budget,
        "plus_10000",
        "We merken op dat u een jaarlijks wijnbudget van meer dan EUR10.000 voorziet. Dat \
         getuigt van een diepe interesse of zelfs een verzamelaarshouding ten opzichte van \
         fijne wijn.",
    ),
    Entry::new(
        BudgetGuidance,
        "text",
        "Wij nodigen u uit om even stil te staan bij de vraag in welke mate of frequentie \
         wijn u voldoening schenkt. Indien uw relatie met wijn vooral betrekking heeft op \
         consumptie, kan het interessant zijn om uw ‘plezierpercentage’ te voelen — en, \
         naarmate de passie groeit, uw budget daarop af te stemmen.\n\nIndien u wijn eerder \
         als investering ziet, geven wij geen beleggingsadvies, maar het algemene kader in \
         de onderstaande grafiek kan u helpen een evenwichtige verdeling te visualiseren. \
         Wijn kan in dat geval worden beschouwd als een alternatief beleggingsmiddel, \
         vergelijkbaar met kunstwerken, oldtimers of luxehorloges.",
    ),
    Entry::new(InvestmentNotice, "text", "OPGELET: Dit vormt geen beleggingsadvies."),

    // ========================================================================
    // HERITAGE AND STORAGE
    // ========================================================================
    Entry::new(
        Possession,
        "cave_personnelle",
        "U bezit (of wilt bezitten) een persoonlijke wijnkelder. Een authentieke keuze die \
         een nauwe band met uw flessen weerspiegelt. Zorg voor een stabiele temperatuur rond \
         12 °C, een vochtigheidsgraad van ongeveer 70 %, vermijd direct licht en voorzie een \
         zachte ventilatie. Een noord- of noordoostgerichte kelder voorkomt \
         temperatuurschommelingen en bevordert een ideale rijping.",
    ),
    Entry::new(
        Possession,
        "cave_externalisee",
        "U kiest voor een externe of professionele wijnopslag. Een praktische oplossing die \
         optimale bewaaromstandigheden biedt zonder onderhoudszorgen. Controleer bij de \
         keuze van een aanbieder de temperatuurstabiliteit, luchtvochtigheid, verzekering en \
         traceerbaarheid. Sommige aanbieders bieden ook digitale toegang tot uw voorraad.",
    ),
    Entry::new(
        Possession,
        "fonds_investissement",
        "U toont interesse in wijnbeleggingsfondsen of -platformen. Let op: GrandcruX geeft \
         geen beleggingsadvies. Wij raden aan om goed geïnformeerd te blijven — onderzoek de \
         structuur van het fonds, de selectiecriteria, de beheerskosten en de liquiditeit. \
         Wijn kan worden beschouwd als een alternatieve beleggingscategorie, op het \
         kruispunt van plezier en tastbaar erfgoed.",
    ),
    Entry::new(
        Possession,
        "pas_encore",
        "U bezit nog geen wijn maar wilt zich informeren. Een uitstekende stap ! De \
         adviseurs van GrandcruX begeleiden u graag bij de basisprincipes van wijnbewaring, \
         de markt en de keuze van uw eerste flessen.",
    ),
    Entry::new(
        MotivationIntro,
        "text",
        "Wij hebben vastgesteld dat uw belangrijkste motivaties de volgende zijn:",
    ),
    Entry::new(
        Motivation,
        "plaisir",
        "Smaakgenot.\n\nDit is de ware essentie van wijn. Een fles delen, een jaargang \
         ontdekken, genieten van gezelligheid — wijn draait om beleving. Bij GrandcruX \
         beschouwen we genot als de eerste en belangrijkste emotionele investering in wijn.",
    ),
    Entry::new(
        Motivation,
        "transmission",
        "Familiale overdracht.\n\nDit toont dat u de juiste vragen stelt. Een wijnkelder \
         doorgeven betekent een verhaal, een herinnering en een smaak delen. Voor meer \
         informatie verwijzen wij naar het tweede deel van dit rapport, gewijd aan het \
         behoud en de overdracht van wijnbezit.",
    ),
    Entry::new(
        Motivation,
        "placement",
        "Langetermijnbelegging.\n\nEen doordachte keuze. Hoewel wij geen rendementadvies \
         geven, kan wijn worden beschouwd als een alternatief langetermijnactief dat \
         zeldzaamheid, plezier en emotionele waarde combineert. Een subtiel evenwicht tussen \
         passie en erfgoed.",
    ),
    Entry::new(
        Motivation,
        "diversification",
        "Diversificatie.\n\nEen verstandige aanpak. Wijn kan deel uitmaken van een \
         evenwichtige vermogensverdeling, naast kunst, oldtimers of luxe horloges. Een \
         unieke mix van esthetiek, beleving en waarde.",
    ),

    // ========================================================================
    // RISK APPETITE
    // ========================================================================
    Entry::new(RiskIntro, "text", "Wij hebben uw risicobereidheid vastgesteld :"),
    Entry::new(
        Risk,
        "tres_faible",
        "Zeer laag risico — u geeft de voorkeur aan veiligheid.\n\nIn dit geval kan wijn \
         worden beschouwd als een plezierbezit, waarvan het belangrijkste 'rendement' ligt \
         in genot en erfgoedwaarde. Er is nauwelijks risico, aangezien wijn een tastbaar \
         goed blijft dat men kan bewaren, doorgeven of consumeren. Wij herinneren eraan dat \
         GrandcruX geen beleggingsadvies verstrekt en dat deze benadering vooral draait om \
         veiligheid en passie.",
    ),
    Entry::new(
        Risk,
        "modere",
        "Gemiddeld risico — een evenwicht tussen plezier en rendement.\n\nDeze houding \
         getuigt van een evenwichtige visie: de wens om plezier te combineren met mogelijke \
         waardestijging. Op bepaalde gezochte jaargangen kan een gematigd rendement worden \
         gerealiseerd, maar altijd op lange termijn en zonder garantie. Wij zijn geen \
         beleggingsadviseurs en geven geen financieel advies. Wijn blijft een alternatief \
         actief, waarbij beleving en erfgoed belangrijker zijn dan pure prestatie.",
    ),
    Entry::new(
        Risk,
        "eleve",
        "Hoog risico — op zoek naar prestaties.\n\nSommige gespecialiseerde spelers bieden \
         beleggingen met hoog risico aan in wijn, vaak gericht op speculatie met zeldzame \
         jaargangen of beperkte producties. De zoektocht naar prestaties is echter, voor \
         zover wij weten, niet wat het meest typerend is voor beleggen in wijn. GrandcruX \
         verstrekt geen beleggingsadvies en richt zich niet op rendement tegen elke prijs. \
         Wijn moet worden gezien als een alternatief, tastbaar en cultureel actief.",
    ),

    // ========================================================================
    // TRANSMISSION AND LEGAL RESERVE
    // ========================================================================
    Entry::new(
        TransmissionIntro,
        "text",
        "Voordat men aan overdracht denkt, is het belangrijk te weten dat de erfopvolging \
         wettelijk geregeld is. Wijn, hoe gepassioneerd en cultureel ook, wordt juridisch \
         beschouwd als een roerend goed. Net als onroerend goed kan het dus worden belast in \
         het kader van de successierechten.\n\nOnthoud vooral dit: in België zijn de \
         successierechten geregionaliseerd. De fiscale regels verschillen naargelang u woont \
         in het Waalse Gewest, het Vlaamse Gewest of het Brussels Hoofdstedelijk Gewest.",
    ),
    Entry::new(
        Children,
        "oui",
        "Wij hebben genoteerd dat u kinderen heeft.\n\nDe aanwezigheid van kinderen heeft \
         een directe invloed op de verdeling van de nalatenschap. Volgens het Burgerlijk \
         Wetboek bestaat er een wettelijke erfrechtelijke reserve voor elk kind. Een deel \
         van uw vermogen — de zogenaamde 'fictieve nalatenschapsmassa' — moet dus verplicht \
         aan hen worden toebedeeld.\n\nDe helft van deze massa is vrij beschikbaar \
         ('beschikbaar deel'), de andere helft vormt de 'reserve' die gelijk verdeeld wordt \
         onder uw kinderen.\n\nDeze regeling waarborgt bescherming van het gezin en biedt \
         tegelijk enige vrijheid. Verderop bekijken we hoe deze regels van toepassing zijn \
         op wijn en wijnkelders.",
    ),
    Entry::new(
        Children,
        "non",
        "Wij hebben genoteerd dat u geen kinderen heeft.\n\nIn dat geval bepaalt de wet uw \
         erfgenamen volgens orde en graad: ouders, broers, zussen, ooms en tantes kunnen \
         rechtstreeks erven. Bij afwezigheid van afstammelingen kunnen de successierechten \
         echter hoog oplopen, vooral bij zijverwanten.\n\nHet is dus verstandig om hier \
         vooraf bij stil te staan, om de symbolische en financiële waarde van uw \
         wijncollectie te behouden. Verderop tonen we hoe bepaalde regelingen de overdracht \
         kunnen optimaliseren.",
    ),
    Entry::new(
        ReserveIntro,
        "text",
        "Naast de belasting bestaan er beschermingsmechanismen voorzien door de wet.\n\nEr \
         is een wettelijke reserve per kind. Dit betekent dat een deel van de \
         nalatenschapsmassa (ook wel 'fictieve massa' genoemd, omdat het schenkingen uit het \
         verleden meerekent) verplicht aan uw kinderen wordt toegewezen.\n\nDe helft van \
         deze massa is vrij beschikbaar en de andere helft wordt gelijk verdeeld onder uw \
         kinderen.",
    ),
    Entry::new(ChildCount, "one", "U heeft {count} kind."),
    Entry::new(ChildCount, "many", "U heeft {count} kinderen."),
    Entry::new(
        ReserveFollowUp,
        "text",
        "Hieronder ziet u een vereenvoudigde voorstelling van de verdeling van deze reserve. \
         Dit geeft weer welk deel van de nalatenschap wettelijk aan elk kind toekomt.\n\nWe \
         zullen deze regels verderop opnieuw bekijken in het specifieke geval van wijn.",
    ),
    Entry::new(ChartLabel, "title", "Nalatenschap (of 'fictieve' massa)"),
    Entry::new(ChartLabel, "disposable", "Beschikbaar deel"),
    Entry::new(ChartLabel, "child", "Reserve kind {index}"),

    // ========================================================================
    // MATRIMONIAL REGIME
    // ========================================================================
    Entry::new(
        MatrimonialIntro,
        "text",
        "Voordat men aan de nalatenschap denkt, moet eerst het huwelijksvermogensstelsel \
         worden vereffend indien dit bestaat. Dit bepaalt wat aan elke echtgenoot toebehoort \
         vóór de verdeling van de erfenis.\n\nWanneer er kinderen zijn, wordt vaak gewerkt \
         met vruchtgebruik (voor de langstlevende echtgenoot) en blote eigendom (voor de \
         kinderen) — een structuur die bescherming en fiscale optimalisatie combineert. We \
         gaan niet in op de technische details.Weet dat voor de wijn een \
         quasi-vruchtgebruikovereenkomst (onderhands of via een notaris) kan worden \
         overwogen.",
    ),
    Entry::new(
        Unmarried,
        "text",
        "U bent niet gehuwd.\n\nDit betekent dat u vrijgezel bent, feitelijk samenwoont of \
         wettelijk samenwoont.\n\n- Bij feitelijke samenwoning erft uw partner niets \
         automatisch. Wilt u dat hij of zij uw wijncollectie of de waarde ervan erft, dan \
         moet u dit vastleggen in een testament.\n\n- Bij wettelijke samenwoning geldt een \
         scheiding van goederen : ieder behoudt zijn eigen vermogen, inclusief zijn \
         wijnbezit.\n\nIn beide gevallen is het verstandig om vooruit te plannen om de \
         waarde van uw wijncollectie te behouden.",
    ),
    Entry::new(
        Regime,
        "communautelegale",
        "U bent gehuwd onder het wettelijk stelsel.\n\nGoederen van vóór het huwelijk \
         blijven persoonlijk, terwijl goederen die tijdens het huwelijk worden verworven, \
         gemeenschappelijk worden.\n\nWijnen die vóór het huwelijk zijn gekocht, blijven dus \
         persoonlijk, terwijl wijnen die daarna zijn verworven, gemeenschappelijk \
         zijn.\n\nDit stelsel biedt een evenwicht tussen autonomie en solidariteit en \
         voorziet in bescherming tussen echtgenoten.",
    ),
    Entry::new(
        Regime,
        "separationbien",
        "U bent gehuwd onder het stelsel van scheiding van goederen.\n\nElke echtgenoot \
         behoudt hier zijn eigen vermogen : er is geen gemeenschappelijk vermogen.\n\nUw \
         wijnen behoren dus uitsluitend tot uw persoonlijke vermogen, tenzij anders \
         overeengekomen (bijvoorbeeld gemeenschappelijke aankoop of schenking).\n\nDit \
         stelsel waarborgt financiële onafhankelijkheid, maar kan aanvullende bescherming \
         voor de langstlevende vereisen.",
    ),
    Entry::new(
        Regime,
        "communauteuniverselle",
        "U bent gehuwd onder het stelsel van algehele gemeenschap.\n\nAlle goederen, zowel \
         van vóór als van na het huwelijk, worden gemeenschappelijk eigendom, tenzij het \
         contract anders bepaalt.\n\nUw wijnbezit behoort dus volledig tot de gemeenschap. \
         Bij overlijden behoudt de langstlevende echtgenoot een groot deel van het vermogen, \
         wat bescherming biedt maar het erfdeel van de kinderen verkleint.\n\nDit stelsel \
         wordt vaak gekozen om de onderlinge bescherming te versterken.",
    ),

    // ========================================================================
    // CORPORATE HOLDING
    // ========================================================================
    Entry::new(
        CompanyIntro,
        "text",
        "Naast de klassieke familiale overdracht kan een deel van het vermogen — zoals wijn \
         — ook via een vennootschap worden beheerd. Dit kan mogelijkheden bieden voor \
         optimalisatie en langetermijnplanning.\n\nIndien u een vennootschap bezit, kan uw \
         boekhouder u informeren over mechanismen die in België bestaan, zoals \
         dividenduitkeringen, liquidatiereserves of het VVPRbis-stelsel. Deze instrumenten \
         kunnen in bepaalde gevallen bijdragen tot een geleidelijke of fiscaal gunstige \
         overdracht.\n\nBespreek deze opties gerust met uw vertrouwenspersoon om te bepalen \
         wat voor u relevant is.",
    ),
    Entry::new(
        Company,
        "type",
        "Wij merken op dat u de volgende vennootschap hebt opgegeven: {company}.",
    ),
    Entry::new(
        Company,
        "non",
        "U hebt geen vennootschap vermeld. In dat geval zal de overdracht van uw wijnbezit \
         hoofdzakelijk plaatsvinden via de gewone erfregels.",
    ),

    // ========================================================================
    // DONATION
    // ========================================================================
    Entry::new(
        DonationIntro,
        "text",
        "Wilt u een geschenk doen — met Kerst, aan uw partner of aan uw kind ? Een \
         uitstekend idee ! Niet alleen een mooi gebaar, maar ook fiscaal \
         interessant.\n\nZoals eerder vermeld, kan een niet-geplande erfenis leiden tot hoge \
         belastingen. In België kunnen de successierechten, afhankelijk van de familieband, \
         oplopen tot meer dan 70 % in bepaalde gevallen. Een manier om dit te vermijden is \
         via schenking — een overdracht tijdens het leven.",
    ),
    Entry::new(
        DonationTypes,
        "text",
        "Er bestaan twee hoofdvormen van schenking:\n\n• Niet-geregistreerde schenking \
         onderhands, volledig gratis (0 %), maar met een 'overlevingsperiode' van 3 tot 5 \
         jaar afhankelijk van het gewest. Bij overlijden van de schenker binnen die termijn \
         blijven successierechten verschuldigd.\n\n• Geregistreerde schenking, via notaris, \
         met een beperkt registratierecht (ongeveer 3 %), maar daarna volledig vrijgesteld \
         van successierechten.\n\nDe keuze hangt af van het gewenste comfort en de aard van \
         het overgedragen goed.",
    ),
    Entry::new(
        DonationPact,
        "text",
        "Stel een aanvullend pact op om de schenking te formaliseren. Dit eenvoudige maar \
         essentiële document verduidelijkt de aard van de schenking en kan bepaalde \
         voorwaarden bevatten: • een conventioneel terugkeerbeding (als de begiftigde \
         overlijdt vóór de schenker, keert het goed terug naar het oorspronkelijke \
         vermogen), • een financiële compensatie gerechtvaardigd door een last, • of een \
         tijdelijk verkoopverbod van de flessen gedurende een bepaalde periode. Denk ook aan \
         enkele bijzondere voorzorgsmaatregelen bij het opstellen van het document: vermeld \
         voor elke fles het millésime (oogstjaar), het domein, en indien nodig een \
         getaxeerde waarde van de fles.",
    ),
    Entry::new(
        DonationTransition,
        "oui",
        "Wij hebben genoteerd dat u in het verleden al schenkingen heeft overwogen. Wees \
         gerust, voor wijn is het niet anders. Dezelfde principes blijven grotendeels van \
         toepassing.",
    ),
    Entry::new(
        DonationTransition,
        "non",
        "Wij hebben genoteerd dat u nog geen schenkingen heeft overwogen. Wijn kan een \
         stijlvolle en betekenisvolle manier zijn om daarmee te beginnen.",
    ),
    Entry::new(
        DonationWine,
        "text",
        "Wijn kan immers, als een tastbaar en vermogensbestanddeel, perfect het voorwerp van \
         een schenking zijn.\n\nWijn, als tastbaar en vermogensbestanddeel, kan zeker het \
         voorwerp zijn van een schenking.\n\nToch zijn enkele voorzorgsmaatregelen \
         aangewezen: laat de waarde van uw wijnkelder schatten door een erkende professional \
         — bij voorkeur in aanwezigheid van de begiftigde — om latere betwistingen te \
         vermijden.\n\nHoud er rekening mee dat de waarde van uw grote wijnen in de loop der \
         tijd kan evolueren. In tegenstelling tot een geldsom kan een mede-erfgenaam bij het \
         overlijden van uw ouder de vermindering van de schenking inroepen, indien deze een \
         inbreuk vormt op zijn of haar reservatair erfdeel.\n\nHet is daarom raadzaam deze \
         vragen in gedachten te houden wanneer u zich laat begeleiden door uw notaris of een \
         vertrouwensadviseur bij de overdracht.",
    ),

    // ========================================================================
    // CONCLUSION AND ANNEX
    // ========================================================================
    Entry::new(
        Conclusion,
        "faible",
        "U hecht beperkte waarde aan het culturele erfgoedaspect.\n\nDat is volkomen \
         begrijpelijk — wijn kan in de eerste plaats een persoonlijk genot zijn, een moment \
         om van te genieten, hier en nu. Toch draagt hij ook een herinnering en een emotie \
         in zich. Elke fles vertelt een verhaal — over een plaats, een gebaar, een \
         vakmanschap — en dat is al erfgoed op zich.\n\nMoge u wijn blijven ervaren als een \
         kunst van het leven, op uw eigen manier en in uw eigen tempo.",
    ),
    Entry::new(
        Conclusion,
        "moyenne",
        "U hecht een gemiddelde waarde aan het culturele erfgoed.\n\nWijn belichaamt precies \
         dat evenwicht — tussen plezier en overdracht, tussen cultuur en delen. Men hoeft \
         geen verzamelaar te zijn om de schoonheid ervan te begrijpen. Wijn verbindt mensen, \
         wekt emoties op en trotseert de tijd.\n\nBij GrandcruX geloven we dat elke kelder, \
         hoe bescheiden ook, een weerspiegeling kan worden van een persoonlijke cultuur — \
         van smaak, herinnering en bewuste overdracht.",
    ),
    Entry::new(
        Conclusion,
        "elevee",
        "U hecht veel waarde aan cultureel erfgoed.\n\nDat is wellicht de mooiste manier om \
         wijn te benaderen — niet enkel als consumptiegoed, maar als levend erfgoed. \
         Bewaren, delen, overdragen — dat zijn de gebaren die de wijncultuur vormen en het \
         verhaal van de liefhebber voortzetten.\n\nBij GrandcruX delen we deze visie \
         volledig: wijn is niet alleen een passie, het is een band tussen generaties, een \
         universele taal van tijd en terroir.",
    ),
    Entry::new(
        PresentationMention,
        "text",
        "We hebben genoteerd dat u geïnteresseerd bent in een presentatie of bijkomende \
         documentatie over wijn als middel tot overdracht, of over de culturele aspecten en \
         goede praktijken.\n\nAarzel niet om dit te bespreken met onze adviseurs of \
         regelmatig onze website te raadplegen voor nieuwe informatie.",
    ),
    Entry::new(
        AnnexIntro,
        "text",
        "Wij hebben uw opmerking genoteerd en danken u daarvoor.\n\nAarzel niet om contact \
         met ons op te nemen als u dit verder wilt bespreken. Indien een schriftelijk \
         antwoord gewenst is, kunt u dit rapport meenemen naar uw afspraak of een \
         conferentie, zodat wij rechtstreeks in dit kader kunnen antwoorden.",
    ),

    // ========================================================================
    // PRINT OPTIONS SHEET
    // ========================================================================
    Entry::new(PrintSheet, "title", "Onze formules voor het gedrukte rapport"),
    Entry::new(PrintSheet, "subtitle", "(Onze afdruk- en leveringsopties)"),
    Entry::new(
        PrintSheet,
        "footer",
        "Indien u geïnteresseerd bent in een van deze formules, neem gerust contact met ons \
         op.",
    ),
    Entry::new(PrintSheet, "team", "Het GrandcruX-team"),
    Entry::new(PrintSheet, "contact", "info@grandcruX.com"),
    Entry::new(PrintOption, "handover", "Afhaling van het rapport in ons kantoor"),
    Entry::new(PrintPrice, "handover", "GRATIS"),
    Entry::new(PrintOption, "post", "Verzending van het rapport per post"),
    Entry::new(PrintPrice, "post", "25 EUR (+ eventuele verzendkosten)"),
    Entry::new(
        PrintOption,
        "delivery",
        "Verzending van het rapport en levering van het wijnspakket",
    ),
    Entry::new(PrintPrice, "delivery", "525 EUR (+ kosten buiten Brussel)"),
    Entry::new(PrintOption, "bespoke", "Alternatieve formule op maat"),
    Entry::new(PrintPrice, "bespoke", "Prijs te bespreken (op aanvraag)"),

    // ========================================================================
    // DELIVERY MAIL
    // ========================================================================
    Entry::new(MailSubject, "text", "Uw gepersonaliseerd wijnrapport!"),
    Entry::new(
        MailBody,
        "text",
        r#"<p>Hallo,</p>
<p>In de bijlage vindt u uw gepersonaliseerd wijnrapport!</p>
<p>We ontmoeten u graag:</p>
<ul>
    <li>door u in te schrijven voor onze conferenties via
        <a href="https://www.grandcrux.com/conference/"
        style="color: blue; text-decoration: underline;">deze link</a>;</li>
    <li>door rechtstreeks een afspraak te maken met een van onze adviseurs via
        <a href="mailto:info@grandcrux.com?subject=Afspraak%20met%20een%20GrandcruX-adviseur"
        style="color: blue; text-decoration: underline;">info@grandcrux.com</a>.</li>
</ul>
<p>Voor andere vragen kunt u ons bereiken via
<a href="mailto:info@grandcrux.com" style="color: blue; text-decoration: underline;">info@grandcrux.com</a>.</p>
<p>We hopen u binnenkort weer te zien!</p>
<p>Met vriendelijke groet,<br>Het GrandcruX-team</p>"#,
    ),
];
