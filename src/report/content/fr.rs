//! French copy.
//!
//! French is the base locale: entries missing from another table resolve here.

use super::Entry;
use super::Topic::*;

pub(super) static ENTRIES: &[Entry] = &[
    // ========================================================================
    // HEADINGS
    // ========================================================================
    Entry::new(Heading, "cover", "Rapport personnalisé sur le vin"),
    Entry::new(Heading, "introduction", "Introduction"),
    Entry::new(Heading, "relationship", "Votre rapport au vin et à son patrimoine"),
    Entry::new(Heading, "diversification", "Le vin comme outil de diversification"),
    Entry::new(Heading, "heritage", "Conserver et valoriser le vin comme un patrimoine"),
    Entry::new(Heading, "risk", "Votre appétence au risque"),
    Entry::new(Heading, "transmission", "Le vin comme outil de transmission"),
    Entry::new(Heading, "reserve", "La réserve légale et la quotité disponible"),
    Entry::new(Heading, "matrimonial", "Le régime matrimonial"),
    Entry::new(Heading, "company", "Modes alternatifs d'optimisation"),
    Entry::new(Heading, "donation", "La donation : transmettre avec sens"),
    Entry::new(Heading, "conclusion", "Pour conclure"),
    Entry::new(Heading, "annex", "ANNEXE"),

    // ========================================================================
    // INTRODUCTION
    // ========================================================================
    Entry::new(
        Introduction,
        "text",
        "Chez GrandcruX, nous pensons que chaque amateur de vin possède ses propres \
         préférences, ses convictions et sa manière d'appréhender le plaisir comme la valeur \
         d'une bouteille. Avant chaque achat ou investissement, il est essentiel de \
         s'informer, de comprendre les enjeux et les opportunités qu'offre cet univers \
         unique.\n\nCe document n'a pas vocation à fournir de conseils en matière financière \
         ou juridique. Il s'agit avant tout d'une présentation personnalisée visant à vous \
         informer et à nourrir votre réflexion, afin de faire de votre passion pour le vin \
         une démarche éclairée et durable.",
    ),

    // ========================================================================
    // PROFILE (KNOWLEDGE / RELATION)
    // ========================================================================
    Entry::new(
        ProfileSummary,
        "text",
        "Nous avons noté que vous êtes {knowledge} et que votre relation principale au vin \
         est orientée vers {relation}.",
    ),
    Entry::new(
        Knowledge,
        "debutant",
        "Votre intérêt pour le vin constitue un excellent point de départ. Le monde du vin \
         est vaste et passionnant : apprendre à distinguer les régions, les millésimes et \
         les styles est une démarche enrichissante qui peut se vivre à travers la \
         dégustation, la lecture ou la visite de domaines.",
    ),
    Entry::new(
        Knowledge,
        "amateur",
        "Votre profil d’amateur éclairé traduit une curiosité solide pour le vin. \
         Approfondir vos connaissances sur les producteurs, les terroirs et les millésimes \
         vous permettra d’affiner votre sélection et de renforcer la dimension plaisir et \
         culturelle de votre cave.",
    ),
    Entry::new(
        Knowledge,
        "connaisseur",
        "Votre profil de connaisseur(se) ou collectionneur(se) révèle une approche experte \
         du vin. Vous êtes sans doute attentif(ve) à la provenance, à la conservation et à \
         la rareté, des éléments essentiels pour préserver la valeur culturelle et \
         potentielle de vos bouteilles dans le temps.",
    ),
    Entry::new(
        Knowledge,
        "professionnel",
        "Votre profil de professionnel(le) du vin implique une compréhension approfondie du \
         marché. Votre expérience vous permet d’envisager le vin comme un univers à la fois \
         économique, sensoriel et culturel. Ce document vise avant tout à compléter cette \
         expertise par une perspective patrimoniale.",
    ),
    Entry::new(
        Knowledge,
        "autre",
        "Votre rapport au vin témoigne d’un intérêt authentique pour cet univers de passion \
         et de transmission. Chaque approche du vin est unique, qu’elle soit gustative, \
         culturelle ou patrimoniale.",
    ),
    Entry::new(
        Relation,
        "consommation",
        "Le vin reste avant tout un produit de plaisir et de convivialité. L’apprécier dans \
         un cadre personnel ou familial fait partie intégrante de son essence culturelle. \
         Choisir, déguster et conserver le vin permettent de tisser un lien vivant avec le \
         patrimoine et les traditions viticoles.",
    ),
    Entry::new(
        Relation,
        "investissement",
        "Vous semblez envisager le vin comme un placement. Il convient toutefois de rappeler \
         que le vin n’est pas un produit financier mais un bien tangible dont la valeur \
         dépend de nombreux facteurs : millésime, conservation, rareté, notoriété du domaine \
         et conditions de marché. Les informations fournies ici sont d’ordre général et ne \
         constituent en aucun cas une recommandation en matière d’investissement.",
    ),
    Entry::new(
        Relation,
        "les_deux",
        "Vous associez à la fois plaisir et approche patrimoniale dans votre rapport au vin. \
         C’est une vision équilibrée, à condition de toujours garder à l’esprit que le vin \
         reste avant tout un produit de passion. Toute considération financière doit être \
         envisagée avec prudence, en tenant compte des aléas du marché et des conditions de \
         conservation. Les éléments présentés dans ce document n’ont pas vocation à \
         constituer un conseil en investissement.",
    ),
    Entry::new(
        Relation,
        "autre",
        "Votre lien au vin illustre une approche personnelle et sincère, ancrée dans la \
         découverte et le plaisir. Chaque bouteille représente une expérience unique et un \
         fragment de patrimoine vivant.",
    ),

    // ========================================================================
    // REGION PREFERENCE
    // ========================================================================
    Entry::new(
        RegionIntro,
        "stated",
        "Vous avez exprimé une préférence pour la région viticole suivante : {region}.",
    ),
    Entry::new(
        RegionIntro,
        "autre",
        "Vous avez indiqué ne pas avoir de préférence particulière pour une région viticole. \
         Cela peut être une excellente occasion d’explorer plusieurs horizons et de recevoir \
         des conseils personnalisés selon vos goûts et objectifs.",
    ),
    Entry::new(
        Region,
        "bordeaux",
        "La région de Bordeaux est une référence mondiale, connue pour ses grands crus \
         classés et son équilibre entre puissance et élégance. C’est une excellente approche \
         pour comprendre la notion de terroir et de longévité des vins.\n\nPosez-vous la \
         question : préférez-vous les vins de la rive gauche (Cabernet Sauvignon, Médoc) ou \
         de la rive droite (Merlot, Saint-Émilion) ?\n\nQuelques noms emblématiques : \
         Château Margaux, Lafite Rothschild, Pétrus, Cheval Blanc.",
    ),
    Entry::new(
        Region,
        "bourgogne",
        "La Bourgogne séduit par son raffinement et sa complexité. C’est une région de \
         vignerons, où chaque parcelle raconte une histoire. S’intéresser à la Bourgogne, \
         c’est explorer la subtilité des climats et l’expression du Pinot Noir et du \
         Chardonnay.\n\nPosez-vous la question : préférez-vous les rouges structurés (Côte \
         de Nuits) ou les blancs prestigieux (Côte de Beaune) ?\n\nQuelques noms : \
         Romanée-Conti, Meursault, Puligny-Montrachet, Chambertin.",
    ),
    Entry::new(
        Region,
        "vallee_du_rhone",
        "La Vallée du Rhône offre des vins généreux, solaires et puissants. Du nord \
         (Côte-Rôtie, Hermitage) au sud (Châteauneuf-du-Pape), la diversité y est \
         remarquable.\n\nPosez-vous la question : recherchez-vous des vins à forte identité \
         (Syrah) ou plus épicés et ronds (Grenache, Mourvèdre) ?\n\nQuelques domaines \
         réputés : E. Guigal, Chapoutier, Château de Beaucastel.",
    ),
    Entry::new(
        Region,
        "loire",
        "La Loire est un fleuve de fraîcheur et de diversité : rouges, blancs, rosés ou \
         effervescents, elle a tout pour plaire. C’est une région idéale pour les amateurs \
         de vins digestes et francs.\n\nPosez-vous la question : êtes-vous plutôt Sauvignon \
         (Sancerre, Pouilly-Fumé) ou Chenin (Vouvray, Anjou) ?\n\nQuelques producteurs : \
         Didier Dagueneau, Huet, Domaine des Roches Neuves.",
    ),
    Entry::new(
        Region,
        "champagne",
        "Le Champagne allie tradition et prestige. Derrière les bulles se cache un \
         savoir-faire exceptionnel. S’intéresser au Champagne, c’est comprendre l’art de \
         l’assemblage et la patience du vieillissement.\n\nPosez-vous la question : \
         préférez-vous les grandes maisons (Dom Pérignon, Bollinger) ou les vignerons \
         indépendants (Jacques Selosse, Egly-Ouriet) ?",
    ),
    Entry::new(
        Region,
        "alsace",
        "L’Alsace séduit par ses vins aromatiques et précis. Riesling, Gewurztraminer, Pinot \
         Gris… chaque cépage y révèle sa pureté. Posez-vous la question : aimez-vous les \
         vins secs et tendus, ou plus riches et exotiques ?\n\nQuelques domaines : Trimbach, \
         Zind-Humbrecht, Weinbach.",
    ),
    Entry::new(
        Region,
        "provence",
        "La Provence évoque la douceur du Sud et la convivialité. Si ses rosés sont \
         célèbres, ses rouges et blancs gagnent aussi en noblesse.\n\nPosez-vous la question \
         : cherchez-vous un vin d’été ou un vin de gastronomie ?\n\nQuelques domaines : \
         Domaine Tempier, Château d’Esclans, Minuty, Ott.",
    ),
    Entry::new(
        Region,
        "italie",
        "L’Italie est un continent viticole à elle seule, avec des vins de caractère et \
         d’identité. Du Piémont (Barolo, Barbaresco) à la Toscane (Brunello, Chianti, Super \
         Toscans), la diversité est immense.\n\nPosez-vous la question : aimez-vous les vins \
         puissants et tanniques, ou plus élégants et floraux ?\n\nQuelques icônes : Gaja, \
         Antinori, Sassicaia, Ornellaia.",
    ),
    Entry::new(
        Region,
        "espagne",
        "L’Espagne combine tradition et renouveau, avec des terroirs remarquables. Du Rioja \
         à la Ribera del Duero, les Tempranillo offrent puissance et velours.\n\nPosez-vous \
         la question : recherchez-vous un vin boisé et intense, ou plus moderne et fruité \
         ?\n\nQuelques domaines : Vega Sicilia, Alvaro Palacios, La Rioja Alta.",
    ),
    Entry::new(
        Region,
        "portugal",
        "Le Portugal, longtemps discret, séduit aujourd’hui par son authenticité. Au-delà \
         des vins de Porto, on y trouve de grands rouges du Douro et de \
         l’Alentejo.\n\nPosez-vous la question : préférez-vous la tradition des vins mutés \
         ou la modernité des vins tranquilles ?\n\nQuelques références : Niepoort, Quinta do \
         Noval, Esporão.",
    ),
    Entry::new(
        Region,
        "nouveau_monde",
        "Les vins du Nouveau Monde incarnent la modernité et la liberté de style : Chili, \
         Argentine, Australie, Californie, Nouvelle-Zélande...\n\nPosez-vous la question : \
         préférez-vous la puissance du soleil ou la fraîcheur du fruit ?\n\nQuelques \
         producteurs emblématiques : Penfolds (Australie), Catena Zapata (Argentine), Opus \
         One (États-Unis).",
    ),
    Entry::new(
        Region,
        "autre",
        "Chaque région du monde offre ses trésors et ses particularités.\n\nIl existe de \
         nombreuses options passionnantes selon vos goûts et vos objectifs.\n\nN’hésitez pas \
         à nous contacter pour en discuter avec un conseiller GrandcruX : nous serons ravis \
         de vous orienter vers les meilleures découvertes.",
    ),

    // ========================================================================
    // BUDGET AND DIVERSIFICATION
    // ========================================================================
    Entry::new(
        Budget,
        "moins_500",
        "Nous notons que vous consacrez un budget inférieur à 500 EUR par an au vin. Ce \
         choix témoigne d’une approche mesurée et axée sur le plaisir simple, sans excès ni \
         contrainte.",
    ),
    Entry::new(
        Budget,
        "500_2000",
        "Nous notons que vous consacrez un budget compris entre 500 EUR et 2 000 EUR par an \
         au vin. Un équilibre appréciable entre plaisir et curiosité, permettant d’explorer \
         de belles appellations tout en gardant la maîtrise de votre budget.",
    ),
    Entry::new(
        Budget,
        "2000_10000",
        "Nous notons que vous consacrez un budget compris entre 2 000 EUR et 10 000 EUR par \
         an au vin. Ce niveau reflète un véritable engagement et une passion affirmée, \
         mêlant plaisir, découverte et valorisation du patrimoine.",
    ),
    Entry::new(
        Budget,
        "plus_10000",
        "Nous notons que vous consacrez un budget supérieur à 10 000 EUR par an au vin. Une \
         telle enveloppe témoigne d’un intérêt profond, voire d’une approche patrimoniale ou \
         collectionneuse du vin.",
    ),
    Entry::new(
        BudgetGuidance,
        "text",
        "Nous vous invitons à un petit exercice personnel : déterminer à quel pourcentage ou \
         fréquence vous trouvez votre satisfaction dans le vin. Si votre rapport au vin est \
         avant tout lié à la consommation, il peut être intéressant de ressentir votre « \
         pourcentage plaisir » — quitte, si la passion évolue, à déployer le budget en \
         conséquence.\n\nSi votre approche s’oriente davantage vers l’investissement, nous \
         ne fournissons pas de conseil en investissement, mais le cadre général du graphique \
         ci-dessous pourrait vous aider à visualiser une répartition équilibrée. Le vin peut \
         ainsi être envisagé comme un placement alternatif, au même titre que des oeuvres \
         d’art, des voitures de collection ou des montres d’exception.",
    ),
    Entry::new(
        InvestmentNotice,
        "text",
        "ATTENTION : Ceci ne constitue pas un conseil en investissement.",
    ),

    // ========================================================================
    // HERITAGE AND STORAGE
    // ========================================================================
    Entry::new(
        Possession,
        "cave_personnelle",
        "Vous possédez (ou envisagez de posséder) une cave personnelle. Un choix empreint \
         d’authenticité, symbole d’un lien intime avec vos bouteilles. Pensez à privilégier \
         une orientation nord ou nord-est pour éviter les variations thermiques, à maintenir \
         une température stable autour de 12 °C et une hygrométrie proche de 70 %. Évitez la \
         lumière directe, et assurez une ventilation douce pour garantir le vieillissement \
         optimal de vos vins.",
    ),
    Entry::new(
        Possession,
        "cave_externalisee",
        "Vous avez opté pour une cave externalisée ou une garde professionnelle. Une \
         solution pratique pour garantir des conditions de conservation idéales, sans \
         contrainte logistique. Avant de choisir un prestataire, vérifiez la stabilité \
         thermique, le contrôle hygrométrique, ainsi que les garanties en matière \
         d’assurance et de traçabilité des bouteilles. Certaines caves proposent également \
         des outils digitaux pour suivre vos stocks à distance.",
    ),
    Entry::new(
        Possession,
        "fonds_investissement",
        "Vous vous intéressez à des fonds ou plateformes d’investissement dans le vin. Nous \
         attirons votre attention sur le fait que GrandcruX ne fournit pas de conseil en \
         investissement. Toutefois, il est toujours pertinent de s’informer de manière \
         éclairée : renseignez-vous sur la gouvernance du fonds, la sélection des crus, les \
         frais de gestion et la liquidité du support. Le vin peut être perçu comme une \
         classe d’actifs alternative, à la croisée du plaisir et du patrimoine tangible.",
    ),
    Entry::new(
        Possession,
        "pas_encore",
        "Vous ne possédez pas encore de vin mais souhaitez vous renseigner. C’est une \
         excellente démarche ! Nos conseillers GrandcruX sont disponibles pour vous \
         accompagner, que ce soit pour découvrir les fondamentaux de la conservation, \
         comprendre le marché du vin ou simplement choisir vos premières bouteilles.",
    ),
    Entry::new(
        MotivationIntro,
        "text",
        "Nous avons noté que vos motivations principales étaient les suivantes :",
    ),
    Entry::new(
        Motivation,
        "plaisir",
        "Le plaisir gustatif.\n\nIl s'agit là d'une approche qui incarne l’essence même du \
         vin. Partager une bouteille, découvrir un millésime, vivre un instant de \
         convivialité : le vin, avant tout, se savoure. Chez GrandcruX, nous croyons que le \
         plaisir est la première forme d’investissement émotionnel dans le vin.",
    ),
    Entry::new(
        Motivation,
        "transmission",
        "La transmission familiale.\n\nC’est le signe que vous vous posez les bonnes \
         questions. Transmettre une cave, c’est transmettre une histoire, une mémoire et un \
         goût. Pour aller plus loin sur ce sujet, nous vous invitons à consulter la deuxième \
         partie du rapport, consacrée à la pérennisation et à la transmission du patrimoine \
         viticole.",
    ),
    Entry::new(
        Motivation,
        "placement",
        "Le placement à long terme.\n\nUne réflexion judicieuse. Sans fournir de conseils en \
         rendement ou en performance, nous soulignons que le vin peut constituer un actif \
         alternatif à horizon long, conjuguant rareté, plaisir et valeur émotionnelle. Un \
         équilibre rare entre passion et patrimoine.",
    ),
    Entry::new(
        Motivation,
        "diversification",
        "La diversification du patrimoine.\n\nUne approche avisée. Le vin peut s’envisager \
         comme une composante complémentaire d’un patrimoine global, au même titre que les \
         voitures de collection, les œuvres d’art ou les montres d’exception. Un choix à la \
         fois esthétique, sensoriel et patrimonial.",
    ),

    // ========================================================================
    // RISK APPETITE
    // ========================================================================
    Entry::new(RiskIntro, "text", "Nous avons noté votre appétence au risque suivante :"),
    Entry::new(
        Risk,
        "tres_faible",
        "Risque très faible — vous privilégiez la sécurité.\n\nDans ce cas, le vin peut être \
         perçu avant tout comme un actif plaisir, dont le 'rendement' principal réside dans \
         le plaisir de dégustation et la valorisation patrimoniale émotionnelle. Il n’y a \
         ici aucun risque ou un risque très contenu, puisque le vin reste un bien tangible \
         qui peut être conservé, transmis… ou dégusté. Nous rappelons que GrandcruX ne \
         fournit pas de conseils en investissement, et que cette approche s’inscrit avant \
         tout dans une logique de sécurité et de passion raisonnée.",
    ),
    Entry::new(
        Risk,
        "modere",
        "Risque modéré — un équilibre entre plaisir et rendement.\n\nCette approche traduit \
         une vision équilibrée : l’envie de concilier plaisir et potentiel de valorisation. \
         Il est effectivement possible d’obtenir des rendements modérés sur certaines cuvées \
         recherchées, mais toujours dans une optique de long terme et sans garantie. Nous ne \
         sommes pas conseillers en investissement, et ne formulons pas de recommandations \
         financières. Le vin reste un placement alternatif, où la dimension plaisir et \
         patrimoine prime sur la recherche de performance.",
    ),
    Entry::new(
        Risk,
        "eleve",
        "Risque élevé — la recherche de performance.\n\nCertains acteurs spécialisés \
         proposent des placements à haut risque dans le vin, souvent liés à la spéculation \
         sur des millésimes rares ou des volumes limités. Cependant, la recherche de \
         performance n’est pas, à notre connaissance, l’élément qui caractérise le plus \
         l’investissement dans le vin. Notre démarche n’a pas vocation à offrir des conseils \
         en investissement ni à viser le rendement à tout prix. Le vin s’envisage avant tout \
         comme un actif alternatif, mêlant passion, culture et patrimoine tangible.",
    ),

    // ========================================================================
    // TRANSMISSION AND LEGAL RESERVE
    // ========================================================================
    Entry::new(
        TransmissionIntro,
        "text",
        "Avant toute chose, il existe des règles légales encadrant la transmission du \
         patrimoine. Le vin, bien qu’il évoque la passion et la culture, est considéré en \
         droit comme un bien meuble. À ce titre, il est, tout comme les biens immeubles, \
         susceptible d’imposition dans le cadre des droits de succession.\n\nRetenez avant \
         tout ceci : en Belgique, les droits de succession sont régionalisés. Les règles \
         d’imposition diffèrent selon que vous résidez en Région wallonne, en Région \
         flamande ou encore à Bruxelles-Capitale.",
    ),
    Entry::new(
        Children,
        "oui",
        "Nous avons noté que vous aviez des enfants.\n\nLa présence d’enfants influe \
         directement sur la répartition successorale. En effet, le Code civil prévoit une \
         réserve héréditaire légale pour chaque enfant. Celle-ci garantit qu’une partie de \
         votre patrimoine — appelée 'masse successorale' ou 'masse fictive' — leur reviendra \
         nécessairement. Cette masse correspond à la somme de vos biens au moment du décès, \
         diminuée de vos dettes et augmentée des donations effectuées de votre \
         vivant.\n\nAinsi, la moitié de cette masse est dite 'quotité disponible' (dont vous \
         pouvez librement disposer), et l’autre moitié constitue la 'réserve' partagée entre \
         vos enfants au prorata.\n\nCes dispositions assurent la protection familiale tout \
         en laissant une marge de liberté patrimoniale. Nous verrons plus bas comment ces \
         règles peuvent s’articuler avec la transmission de votre cave et de vos vins.",
    ),
    Entry::new(
        Children,
        "non",
        "Nous avons noté que vous n’aviez pas d’enfants.\n\nDans ce cas, la loi désigne vos \
         héritiers selon le principe des ordres et des degrés : vos parents, frères, soeurs, \
         oncles et tantes peuvent hériter directement. Cependant, en l’absence de \
         descendants, les droits de succession peuvent s’avérer élevés, notamment lorsqu’ils \
         s’appliquent à des collatéraux.\n\nIl peut être utile d’y réfléchir à l’avance, \
         afin de préserver la valeur symbolique et financière de votre cave. Nous verrons \
         plus bas comment certaines dispositions patrimoniales peuvent optimiser cette \
         transmission.",
    ),
    Entry::new(
        ReserveIntro,
        "text",
        "À côté des taxations, il existe heureusement des règles de protection mises en \
         place par la loi.\n\nAinsi, une réserve légale est prévue par enfant. Très \
         concrètement, cela signifie qu’une partie de la masse successorale (également \
         appelée 'masse fictive', car elle additionne fictivement les biens donnés de votre \
         vivant) est réservée à vos enfants.\n\nCette masse se partage entre deux moitiés : \
         la quotité disponible (librement transmissible) et la réserve (protégée pour vos \
         héritiers).",
    ),
    Entry::new(ChildCount, "one", "Vous avez {count} enfant."),
    Entry::new(ChildCount, "many", "Vous avez {count} enfants."),
    Entry::new(
        ReserveFollowUp,
        "text",
        "Voici donc comment se répartit la réserve de vos enfants sur la moitié de la masse \
         successorale. Ceci illustre, de manière simplifiée, ce que la loi leur garantit en \
         cas de succession.\n\nNous reprendrons ces règles plus bas dans le cas particulier \
         du vin.",
    ),
    Entry::new(ChartLabel, "title", "Masse successorale (ou 'fictive')"),
    Entry::new(ChartLabel, "disposable", "Quotité disponible"),
    Entry::new(ChartLabel, "child", "Réserve enfant {index}"),

    // ========================================================================
    // MATRIMONIAL REGIME
    // ========================================================================
    Entry::new(
        MatrimonialIntro,
        "text",
        "Avant d’aborder la succession, il faut d’abord liquider le régime matrimonial \
         lorsqu’il en existe un. Ce principe est essentiel : il permet de déterminer ce qui \
         appartient à chacun des époux avant toute répartition successorale.\n\nLorsque le \
         couple a des enfants, la succession associe souvent les notions d’usufruit (au \
         profit du conjoint survivant) et de nue-propriété (au profit des enfants). Cette \
         structure permet à la fois une protection du conjoint et une optimisation fiscale. \
         Nous n’entrerons pas ici dans le détail technique de ces règles. Sachez que pour le \
         vin, une convention de quasi-usufruit (sous seing privé ou chez le notaire) \
         pourrait être envisagée.",
    ),
    Entry::new(
        Unmarried,
        "text",
        "Vous n’êtes pas marié(e).\n\nDans ce cas, vous êtes soit célibataire, soit en \
         cohabitation de fait, soit en cohabitation légale.\n\n- En cas de cohabitation de \
         fait, votre partenaire ne reçoit rien par succession légale. Si vous souhaitez \
         qu’il ou elle hérite de votre cave ou de la valeur de vos vins, il est nécessaire \
         de le prévoir expressément par testament.\n\n- En cas de cohabitation légale, vous \
         êtes assimilé à un régime de séparation des biens : vos patrimoines restent \
         distincts, chacun conservant la propriété de ses biens, y compris vos vins et \
         bouteilles personnelles.\n\nDans les deux cas, la prévoyance et la clarté juridique \
         sont des clés pour préserver la transmission harmonieuse de votre patrimoine \
         viticole.",
    ),
    Entry::new(
        Regime,
        "communautelegale",
        "Vous êtes marié(e) sous le régime de la communauté légale.\n\nDans ce régime, les \
         biens acquis avant le mariage restent propres, tandis que ceux acquis pendant le \
         mariage (y compris les revenus) deviennent communs.\n\nVos vins achetés avant le \
         mariage restent donc votre propriété personnelle, tandis que les bouteilles \
         acquises durant le mariage appartiennent à la communauté.\n\nCe régime assure un \
         équilibre entre autonomie et partage. Il offre également certaines protections \
         fiscales et successorales entre époux.",
    ),
    Entry::new(
        Regime,
        "separationbien",
        "Vous êtes marié(e) sous le régime de la séparation de biens.\n\nChaque époux \
         conserve ici son patrimoine propre. Il n’existe pas de masse commune : chacun reste \
         propriétaire exclusif des biens qu’il acquiert.\n\nVos vins sont donc strictement \
         rattachés à votre patrimoine personnel, sauf mention contraire (donation, achat \
         commun, etc.).\n\nCe régime offre une grande indépendance patrimoniale, mais peut \
         nécessiter une attention accrue à la protection du conjoint survivant.",
    ),
    Entry::new(
        Regime,
        "communauteuniverselle",
        "Vous êtes marié(e) sous le régime de la communauté universelle.\n\nTous les biens, \
         qu’ils aient été acquis avant ou pendant le mariage, sont mis en commun, sauf \
         clauses particulières dans le contrat.\n\nLes vins acquis avant ou après le mariage \
         appartiennent donc à la communauté. En cas de décès, le conjoint survivant conserve \
         une part significative du patrimoine, ce qui peut favoriser la stabilité \
         successorale mais limiter la part des enfants.\n\nCe régime est souvent choisi dans \
         une logique de protection maximale du couple.",
    ),

    // ========================================================================
    // CORPORATE HOLDING
    // ========================================================================
    Entry::new(
        CompanyIntro,
        "text",
        "Outre la transmission familiale classique, certaines formes de détention \
         patrimoniale peuvent s’effectuer par le biais d’une société. Cela peut offrir des \
         voies d’optimisation ou de planification, notamment lorsqu’il s’agit d’actifs \
         tangibles comme le vin.\n\nSi vous disposez d’une société, plusieurs leviers légaux \
         belges peuvent être abordés avec votre comptable : le versement de dividendes, la \
         constitution de réserves de liquidation, ou encore le régime fiscal VVPRbis. Ces \
         mécanismes peuvent, dans certains cas, contribuer à une transmission progressive ou \
         fiscalement efficiente.\n\nNous vous invitons à aborder ces questions avec votre \
         professionnel de confiance afin d’en évaluer la pertinence dans votre situation.",
    ),
    Entry::new(
        Company,
        "type",
        "Nous notons que vous disposez de la société suivante : {company}.",
    ),
    Entry::new(
        Company,
        "non",
        "Vous n’avez pas de société déclarée. Dans ce cas, la transmission de votre \
         patrimoine viticole s’effectuera principalement à titre personnel, dans le cadre du \
         droit successoral classique.",
    ),

    // ========================================================================
    // DONATION
    // ========================================================================
    Entry::new(
        DonationIntro,
        "text",
        "Désirez-vous faire un cadeau à Noël, à votre compagne, à votre enfant ou à un \
         proche ? C’est une excellente idée ! Non seulement ce geste fait plaisir, mais il \
         peut aussi avoir un intérêt fiscal insoupçonné.\n\nComme nous l’avons évoqué plus \
         haut, la succession légale non préparée peut se transformer en véritable gouffre \
         fiscal. En Belgique, selon le lien de parenté, les droits de succession peuvent \
         grimper jusqu’à 70 % ou plus dans certains cas. Une manière d’anticiper et \
         d’alléger cette charge consiste à donner de son vivant : la donation.",
    ),
    Entry::new(
        DonationTypes,
        "text",
        "Il existe deux grands types de donation :\n\n• La donation sous seing privé, non \
         enregistrée, gratuite (0 %), mais soumise à une période dite de « survie » de 3 à 5 \
         ans selon la région. En cas de décès du donateur pendant ce délai, les droits de \
         succession restent dus.\n\n• La donation enregistrée, via un notaire, soumise à un \
         droit d’enregistrement modéré (environ 3 %), mais définitivement exonérée de droits \
         de succession. Elle offre donc sécurité et transparence.\n\nLe choix dépend du \
         niveau de confort souhaité et de la nature du bien transmis.",
    ),
    Entry::new(
        DonationPact,
        "text",
        "Rédigez un pacte adjoint afin de formaliser la donation. Ce document, simple mais \
         essentiel, précise la nature du don et peut contenir certaines conditions : • le \
         retour conventionnel (si le donataire décède avant le donateur, le bien revient au \
         patrimoine initial), • une compensation financière justifiée par une charge, • ou \
         une interdiction temporaire de vente des bouteilles pendant une période déterminée. \
         Songez également à quelques précautions particulières lors de la rédaction : \
         mentionnez pour chaque bouteille son millésime, son domaine, et, si nécessaire, un \
         montant expertisé de la bouteille.",
    ),
    Entry::new(
        DonationTransition,
        "oui",
        "Nous avons noté que vous avez déjà envisagé des donations par le passé. \
         Rassurez-vous : il n’en va pas autrement pour le vin. Les mêmes principes \
         s’appliquent, à quelques nuances près.",
    ),
    Entry::new(
        DonationTransition,
        "non",
        "Nous avons noté que vous n'avez pas encore envisagé de donations par le passé. Le \
         vin constitue une manière élégante et symbolique d’envisager une première \
         transmission.",
    ),
    Entry::new(
        DonationWine,
        "text",
        "En effet, le vin, en tant que bien matériel et patrimonial, peut ainsi tout à fait \
         faire l’objet d’une donation.\n\nToutefois, certaines précautions s’imposent : \
         faites expertiser la valeur de votre cave par un professionnel reconnu — idéalement \
         en présence du donataire — afin d’éviter toute contestation ultérieure.\n\nGardez \
         malgré tout à l’esprit que la valeur de vos grands crus peut évoluer au fil du \
         temps. Ainsi, contrairement à une somme d’argent, un cohéritier pourrait invoquer \
         la réduction de la donation au moment du décès de votre parent, si celle-ci venait \
         à porter atteinte à sa réserve héréditaire.\n\nIl est donc recommandé d'avoir ces \
         questions à l'esprit lorsque vous vous faites accompagner par votre notaire ou un \
         conseiller de confiance lors de la transmission.",
    ),

    // ========================================================================
    // CONCLUSION AND ANNEX
    // ========================================================================
    Entry::new(
        Conclusion,
        "faible",
        "Vous avez indiqué accorder une importance limitée à la notion de patrimoine \
         culturel.\n\nC’est un point de vue que nous comprenons : le vin peut avant tout \
         être un plaisir personnel, une expérience intime, vécue dans l’instant. Mais même \
         dans cette approche, il conserve une dimension de mémoire et d’émotion. Chaque \
         bouteille, chaque millésime raconte une histoire — celle d’un lieu, d’un geste, \
         d’un savoir-faire. Et c’est déjà, à sa manière, une trace \
         patrimoniale.\n\nPuissiez-vous continuer à savourer le vin comme un art de vivre, à \
         votre rythme et selon vos envies.",
    ),
    Entry::new(
        Conclusion,
        "moyenne",
        "Vous accordez une importance modérée à la notion de patrimoine culturel.\n\nLe vin \
         s’inscrit justement dans cet équilibre : entre plaisir et transmission, entre \
         culture et partage. Il n’est pas nécessaire d’être collectionneur ou héritier pour \
         en saisir la beauté. Le vin relie, inspire et traverse le temps — il appartient à \
         ceux qui le font vivre.\n\nChez GrandcruX, nous croyons que chaque cave, même \
         modeste, peut devenir le reflet d’une culture personnelle, celle du goût, du \
         souvenir et de la transmission raisonnée.",
    ),
    Entry::new(
        Conclusion,
        "elevee",
        "Vous accordez une grande importance à la notion de patrimoine culturel.\n\nC’est \
         là, sans doute, la plus belle manière d’aborder le vin : non comme un bien de \
         consommation, mais comme un héritage vivant. Préserver, partager, transmettre — \
         trois gestes qui fondent la culture du vin et qui prolongent l’histoire de ceux qui \
         l’aiment.\n\nChez GrandcruX, nous partageons pleinement cette vision : le vin n’est \
         pas seulement une passion, il est un lien entre les générations, un langage \
         universel du temps et de la terre.",
    ),
    Entry::new(
        PresentationMention,
        "text",
        "Nous avons noté que vous étiez intéressé(e) par une présentation ou une \
         documentation complémentaire sur le vin comme support de transmission ou sur les \
         aspects culturels et les bonnes pratiques.\n\nN’hésitez pas à en discuter avec nos \
         conseillers ou à consulter régulièrement les informations mises à jour sur notre \
         site.",
    ),
    Entry::new(
        AnnexIntro,
        "text",
        "Nous avons noté votre commentaire et nous vous en remercions.\n\nN'hésitez pas à \
         prendre contact avec nous afin que nous en discutions. Si une réponse écrite est \
         souhaitée, vous pouvez apporter ce rapport lors de votre rendez-vous ou d'une \
         conférence et nous y répondrons directement dans cet encadré.",
    ),

    // ========================================================================
    // PRINT OPTIONS SHEET
    // ========================================================================
    Entry::new(PrintSheet, "title", "Nos formules d'impression du rapport"),
    Entry::new(PrintSheet, "subtitle", "(Nos options d’impression et de livraison)"),
    Entry::new(
        PrintSheet,
        "footer",
        "Si l'une de ces formules vous intéresse, n'hésitez pas a nous contacter.",
    ),
    Entry::new(PrintSheet, "team", "L'équipe GrandcruX"),
    Entry::new(PrintSheet, "contact", "info@grandcruX.com"),
    Entry::new(PrintOption, "handover", "Remise en main propre du rapport sur rendez-vous"),
    Entry::new(PrintPrice, "handover", "GRATUIT"),
    Entry::new(PrintOption, "post", "Envoi du rapport par la poste"),
    Entry::new(PrintPrice, "post", "25 EUR (+ frais de port éventuels)"),
    Entry::new(
        PrintOption,
        "delivery",
        "Envoi du rapport et livraison à domicile du pack découverte",
    ),
    Entry::new(PrintPrice, "delivery", "525 EUR (+ frais si hors Bruxelles)"),
    Entry::new(PrintOption, "bespoke", "Formule alternative sur mesure"),
    Entry::new(PrintPrice, "bespoke", "Prix à discuter (sur devis)"),

    // ========================================================================
    // DELIVERY MAIL
    // ========================================================================
    Entry::new(MailSubject, "text", "Votre rapport sur le vin!"),
    Entry::new(
        MailBody,
        "text",
        r#"<p>Bonjour,</p>
<p>Veuillez trouver en pièce jointe votre rapport personnalisé sur le vin!</p>
<p>N'hésitez pas à nous rencontrer :</p>
<ul>
    <li>en vous inscrivant à nos conférences, en cliquant sur
        <a href="https://www.grandcrux.com/conference/"
        style="color: blue; text-decoration: underline;">ce lien</a>;</li>
    <li>en fixant un rendez-vous directement avec un de nos conseillers, en nous écrivant à
        <a href="mailto:info@grandcrux.com?subject=Prise%20de%20rendez-vous%20avec%20un%20conseiller"
        style="color: blue; text-decoration: underline;">info@grandcrux.com</a>.</li>
</ul>
<p>Vous souhaitez nous contacter pour toutes autres questions ?
N'hésitez pas à nous écrire à
<a href="mailto:info@grandcrux.com" style="color: blue; text-decoration: underline;">info@grandcrux.com</a>.</p>
<p>Nous espérons vous revoir très bientôt!</p>
<p>Cordialement,<br>L’équipe GrandcruX</p>"#,
    ),
];
